//! # Token ``{ T -> Vec<u8> }`` Vocabulary

use core::marker::PhantomData;

use crate::{
    errors::{WMResult, WordmergeError},
    types::{Pair, TokenType},
    vocab::validators::{U8_SIZE, try_vocab_size},
};

/// Append-only table of token spans, indexed by token id.
///
/// Ids ``0..=255`` are always the single-byte spans; every later id
/// is the concatenation of the two spans it was merged from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenVocab<T: TokenType> {
    /// ``spans[id]`` is the byte span of token ``id``.
    spans: Vec<Vec<u8>>,

    marker: PhantomData<T>,
}

impl<T: TokenType> Default for TokenVocab<T> {
    fn default() -> Self {
        Self {
            spans: (0..U8_SIZE).map(|b| vec![b as u8]).collect(),
            marker: PhantomData,
        }
    }
}

impl<T: TokenType> TokenVocab<T> {
    /// Build a [`TokenVocab`] from a ``spans[id]`` table.
    ///
    /// Only checks that the ids fit `T`;
    /// see [`crate::vocab::BpeVocab::init`] for full validation.
    pub fn from_spans(spans: Vec<Vec<u8>>) -> WMResult<Self> {
        try_vocab_size::<T>(spans.len())?;
        Ok(Self {
            spans,
            marker: PhantomData,
        })
    }

    /// The number of tokens.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// The spans, indexed by token id.
    pub fn spans(&self) -> &[Vec<u8>] {
        &self.spans
    }

    /// Look up the span for a token.
    pub fn get(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        token
            .to_usize()
            .and_then(|idx| self.spans.get(idx))
            .map(Vec::as_slice)
    }

    /// Iterate ``(token, span)`` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &[u8])> {
        self.spans
            .iter()
            .enumerate()
            .filter_map(|(idx, span)| T::from_usize(idx).map(|t| (t, span.as_slice())))
    }

    /// Append the span for a merge of `pair`, returning the new token id.
    pub fn push_merge(
        &mut self,
        pair: Pair<T>,
    ) -> WMResult<T> {
        let next = self.spans.len();
        let token = T::from_usize(next).ok_or(WordmergeError::VocabSizeOverflow { size: next + 1 })?;

        let mut span = self
            .get(pair.0)
            .ok_or_else(|| WordmergeError::unknown_token(pair.0))?
            .to_vec();
        span.extend_from_slice(
            self.get(pair.1)
                .ok_or_else(|| WordmergeError::unknown_token(pair.1))?,
        );

        self.spans.push(span);
        Ok(token)
    }
}
