//! # Vocabulary Training
//!
//! [`BpeTrainer`] learns a [`crate::vocab::BpeVocab`] from a text corpus.
//!
//! Training starts from the raw UTF-8 bytes of the corpus and repeats,
//! once per merge:
//! 1. count adjacent pairs ([`crate::stats::PairStats`]);
//! 2. pick the most frequent pair; ties go to the pair seen first;
//! 3. assign it the next token id, ``256 + merge_index``;
//! 4. rewrite the corpus, replacing the pair with the new token.
//!
//! Training stops early, with a warning, once no adjacent pairs remain.
//!
//! Each merge rescans the whole corpus; this is meant for small corpora
//! and small vocabularies. Training is single-threaded.
//!
//! ```rust
//! use wordmerge::{training::BpeTrainerOptions, vocab::BpeVocab};
//!
//! let mut trainer = BpeTrainerOptions::new(258).init();
//! trainer.update_from_samples(["aaabdaaabac"]);
//!
//! let vocab: BpeVocab<u32> = trainer.train().unwrap();
//! assert_eq!(vocab.merges().merges(), &[((97, 97), 256), ((256, 97), 257)]);
//! ```

mod bpe_trainer;

#[doc(inline)]
pub use bpe_trainer::{BpeTrainer, BpeTrainerOptions};
