//! Validators for vocabulary configuration.
use crate::{
    errors::{WMResult, WordmergeError},
    types::TokenType,
};

/// The size of the u8 space; also the number of byte tokens.
pub const U8_SIZE: usize = u8::MAX as usize + 1;

/// Validates and returns the vocabulary size.
///
/// The size must be at least the size of the u8 space, and every
/// id in ``0..vocab_size`` must be representable as a `T`.
pub fn try_vocab_size<T: TokenType>(vocab_size: usize) -> WMResult<usize> {
    if vocab_size < U8_SIZE {
        Err(WordmergeError::VocabSizeTooSmall { size: vocab_size })
    } else if T::from_usize(vocab_size - 1).is_none() {
        Err(WordmergeError::VocabSizeOverflow { size: vocab_size })
    } else {
        Ok(vocab_size)
    }
}
