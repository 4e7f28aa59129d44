//! # `wordmerge` Byte Pair Encoding Tokenizer
//!
//! A small, from-scratch byte pair encoding (BPE) tokenizer.
//!
//! `wordmerge` learns a vocabulary of byte sequences from a text corpus,
//! and uses it to convert text to and from token ids.
//!
//! See:
//! * [`stats`] for adjacent pair statistics, and the pair merge primitive.
//! * [`training`] to train a [`vocab::BpeVocab`].
//! * [`encoders`] to encode text into tokens.
//! * [`decoders`] to decode tokens into text.
//! * [`vocab`] to manage vocabularies, and [`vocab::io`] to save and load them.
//! * [`BpeTokenizer`] which combines all of the above.
//!
//! ## Token Ids
//!
//! Ids ``0..256`` are the raw byte values; each learned merge appends the
//! next id, ``256 + rank``. Merges are applied during encoding in the order
//! they were learned.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``foldhash``
//! * ``rayon``
//!
//! #### feature: ``foldhash``
//!
//! This swaps all `HashMap` implementations for ``foldhash``.
//!
//! This is done by the ``types::WMHashMap`` type alias machinery.
//!
//! #### feature: ``rayon``
//!
//! This enables parallel batch encode / decode wrappers using the ``rayon`` crate.
//! Training is always single-threaded.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Training, Saving, and Loading
//!
//! ```rust,no_run
//! use wordmerge::{BpeTokenizer, TokenizerOptions, WMResult};
//!
//! fn example() -> WMResult<()> {
//!     let mut tok: BpeTokenizer = TokenizerOptions::new(300).build()?;
//!     tok.train_from_samples(["some text", "some more text"])?;
//!     tok.save("vocab.json", "merges.txt")?;
//!
//!     let mut loaded: BpeTokenizer = TokenizerOptions::new(300).build()?;
//!     loaded.load("vocab.json", "merges.txt")?;
//!
//!     let tokens = loaded.encode("some text");
//!     assert_eq!(loaded.decode(&tokens)?, "some text");
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod normalize;
pub mod stats;
pub mod tokenizer;
pub mod training;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use decoders::TokenDecoder;
#[doc(inline)]
pub use encoders::TokenEncoder;
#[doc(inline)]
pub use errors::{WMResult, WordmergeError};
#[doc(inline)]
pub use tokenizer::{BpeTokenizer, TokenizerOptions};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::BpeVocab;
