//! # Vocabulary
//!
//! A trained model is a [`BpeVocab`]:
//! * a [`TokenVocab`] ``{ T -> Vec<u8> }`` span table, where ids
//!   ``0..=255`` are the raw bytes;
//! * a [`MergeTable`] ``{ (T, T) -> T }`` of learned merges, in rank order.
//!
//! See [`io`] for the on-disk formats.

pub mod io;
pub mod validators;

mod bpe_vocab;
mod merge_table;
mod token_vocab;

#[doc(inline)]
pub use bpe_vocab::{BpeVocab, try_validate_bpe_vocab};
#[doc(inline)]
pub use merge_table::MergeTable;
#[doc(inline)]
pub use token_vocab::TokenVocab;
