//! # BPE Vocabulary

use crate::{
    errors::{WMResult, WordmergeError},
    types::{Pair, TokenType},
    vocab::{MergeTable, TokenVocab, validators::U8_SIZE},
};

/// Validate that a [`TokenVocab`] and [`MergeTable`] describe the same model.
///
/// - ids ``0..256`` are the single-byte spans;
/// - there is exactly one token per byte and per merge;
/// - the merge at rank ``r`` is ``(a, b) -> 256 + r``, with ``a, b < 256 + r``;
/// - every merge span is the concatenation of its parents' spans.
pub fn try_validate_bpe_vocab<T: TokenType>(
    tokens: &TokenVocab<T>,
    merges: &MergeTable<T>,
) -> WMResult<()> {
    for (idx, span) in tokens.spans().iter().take(U8_SIZE).enumerate() {
        if span.as_slice() != [idx as u8] {
            return Err(WordmergeError::VocabConflict(format!(
                "byte token {idx} maps to {span:?}"
            )));
        }
    }

    if tokens.len() != U8_SIZE + merges.len() {
        return Err(WordmergeError::VocabConflict(format!(
            "vocab has {} tokens; expected {} bytes + {} merges",
            tokens.len(),
            U8_SIZE,
            merges.len()
        )));
    }

    for (rank, &((a, b), t)) in merges.iter().enumerate() {
        let expected = U8_SIZE + rank;
        if t.to_usize() != Some(expected) {
            return Err(WordmergeError::VocabConflict(format!(
                "merge {rank} ({a}, {b}) -> {t}; expected token {expected}"
            )));
        }
        if a >= t || b >= t {
            return Err(WordmergeError::VocabConflict(format!(
                "merge ({a}, {b}) -> {t} has a parent not learned before it"
            )));
        }

        let span = tokens.get(t).unwrap_or_default();
        let left = tokens.get(a).unwrap_or_default();
        let right = tokens.get(b).unwrap_or_default();
        if span.len() != left.len() + right.len()
            || !span.starts_with(left)
            || !span.ends_with(right)
        {
            return Err(WordmergeError::VocabConflict(format!(
                "token {t} span {span:?} is not {left:?} + {right:?}"
            )));
        }
    }

    Ok(())
}

/// A byte-pair vocabulary: token spans plus the ranked merge table.
///
/// Instances are always validated; see [`try_validate_bpe_vocab`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BpeVocab<T: TokenType> {
    /// ``{ T -> Vec<u8> }``.
    tokens: TokenVocab<T>,

    /// ``{ (T, T) -> T }`` in rank order.
    merges: MergeTable<T>,
}

impl<T: TokenType> BpeVocab<T> {
    /// Initialize a [`BpeVocab`] from its parts.
    pub fn init(
        tokens: TokenVocab<T>,
        merges: MergeTable<T>,
    ) -> WMResult<Self> {
        try_validate_bpe_vocab(&tokens, &merges)?;
        Ok(Self { tokens, merges })
    }

    /// Build a [`BpeVocab`] from the merge table alone.
    ///
    /// The token spans are replayed from the merges.
    pub fn from_merges(merges: MergeTable<T>) -> WMResult<Self> {
        let mut tokens = TokenVocab::default();
        for &(pair, t) in merges.iter() {
            let next = tokens.push_merge(pair)?;
            if next != t {
                return Err(WordmergeError::VocabConflict(format!(
                    "merge {pair:?} -> {t}; expected token {next}"
                )));
            }
        }
        Self::init(tokens, merges)
    }

    /// The token spans.
    pub fn tokens(&self) -> &TokenVocab<T> {
        &self.tokens
    }

    /// The merge table.
    pub fn merges(&self) -> &MergeTable<T> {
        &self.merges
    }

    /// The number of tokens (bytes + merges).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// The largest token id.
    pub fn max_token(&self) -> T {
        // Always at least the 256 byte tokens.
        T::from_usize(self.len() - 1).unwrap_or_else(T::max_value)
    }

    /// Look up the span for a token.
    pub fn get_span(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        self.tokens.get(token)
    }

    /// Look up ``(rank, token)`` for a pair.
    pub fn lookup_ranked(
        &self,
        pair: &Pair<T>,
    ) -> Option<(usize, T)> {
        self.merges.lookup_ranked(pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let vocab: BpeVocab<u32> = BpeVocab::default();
        assert_eq!(vocab.len(), 256);
        assert_eq!(vocab.max_token(), 255);
        assert!(vocab.merges().is_empty());
        try_validate_bpe_vocab(vocab.tokens(), vocab.merges()).unwrap();
    }

    #[test]
    fn test_from_merges() {
        let merges =
            MergeTable::<u32>::try_from_merges([((97, 98), 256), ((256, 99), 257)]).unwrap();
        let vocab = BpeVocab::from_merges(merges).unwrap();

        assert_eq!(vocab.len(), 258);
        assert_eq!(vocab.max_token(), 257);
        assert_eq!(vocab.get_span(257), Some("abc".as_bytes()));
        assert_eq!(vocab.lookup_ranked(&(256, 99)), Some((1, 257)));
    }

    #[test]
    fn test_from_merges_bad_ids() {
        let merges = MergeTable::<u32>::try_from_merges([((97, 98), 300)]).unwrap();
        assert!(matches!(
            BpeVocab::from_merges(merges),
            Err(WordmergeError::VocabConflict(_))
        ));

        // Forward reference to a token not yet learned.
        let merges = MergeTable::<u32>::try_from_merges([((257, 98), 256)]).unwrap();
        assert!(BpeVocab::from_merges(merges).is_err());
    }

    #[test]
    fn test_init_rejects_mismatched_spans() {
        let merges = MergeTable::<u32>::try_from_merges([((97, 98), 256)]).unwrap();

        let mut spans = TokenVocab::<u32>::default().spans().to_vec();
        spans.push(b"ba".to_vec());
        let tokens = TokenVocab::from_spans(spans).unwrap();

        assert!(matches!(
            BpeVocab::init(tokens, merges.clone()),
            Err(WordmergeError::VocabConflict(_))
        ));

        // Missing merge token.
        assert!(BpeVocab::init(TokenVocab::default(), merges).is_err());
    }

    #[test]
    fn test_init_rejects_bad_byte_tokens() {
        let mut spans = TokenVocab::<u32>::default().spans().to_vec();
        spans[65] = vec![66];
        let tokens = TokenVocab::<u32>::from_spans(spans).unwrap();

        assert!(BpeVocab::init(tokens, MergeTable::default()).is_err());
    }
}
