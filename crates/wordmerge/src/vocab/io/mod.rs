//! # Vocabulary IO
//!
//! A [`BpeVocab`] is stored as two files:
//! * a JSON vocabulary ``{ id -> span }``; see [`write_json_vocab`].
//! * a text merge table, one ``left\tright\ttoken`` line per merge,
//!   in rank order; see [`write_merges`].
//!
//! ## Saving and Loading
//!
//! ```rust,no_run
//! use wordmerge::vocab::{
//!     BpeVocab,
//!     io::{load_bpe_vocab_paths, save_bpe_vocab_paths},
//! };
//!
//! fn example(vocab: &BpeVocab<u32>) -> wordmerge::WMResult<BpeVocab<u32>> {
//!     save_bpe_vocab_paths(vocab, "vocab.json", "merges.txt")?;
//!     load_bpe_vocab_paths("vocab.json", "merges.txt")
//! }
//! ```

use std::path::Path;

use crate::{errors::WMResult, types::TokenType, vocab::BpeVocab};

mod json_vocab;
mod merges_text;

#[doc(inline)]
pub use json_vocab::*;
#[doc(inline)]
pub use merges_text::*;

/// Save a [`BpeVocab`] to a vocabulary file and a merges file.
pub fn save_bpe_vocab_paths<T, V, M>(
    vocab: &BpeVocab<T>,
    vocab_path: V,
    merges_path: M,
) -> WMResult<()>
where
    T: TokenType,
    V: AsRef<Path>,
    M: AsRef<Path>,
{
    save_json_vocab_path(vocab.tokens(), vocab_path.as_ref())?;
    save_merges_path(vocab.merges(), merges_path.as_ref())?;

    log::info!(
        "Saved vocab ({} tokens) to {:?}, merges ({}) to {:?}",
        vocab.len(),
        vocab_path.as_ref(),
        vocab.merges().len(),
        merges_path.as_ref()
    );
    Ok(())
}

/// Load and validate a [`BpeVocab`] from a vocabulary file and a merges file.
pub fn load_bpe_vocab_paths<T, V, M>(
    vocab_path: V,
    merges_path: M,
) -> WMResult<BpeVocab<T>>
where
    T: TokenType,
    V: AsRef<Path>,
    M: AsRef<Path>,
{
    let tokens = load_json_vocab_path(vocab_path.as_ref())?;
    let merges = load_merges_path(merges_path.as_ref())?;
    let vocab = BpeVocab::init(tokens, merges)?;

    log::info!(
        "Loaded vocab ({} tokens) from {:?}, merges ({}) from {:?}",
        vocab.len(),
        vocab_path.as_ref(),
        vocab.merges().len(),
        merges_path.as_ref()
    );
    Ok(vocab)
}
