//! # Merge Scan Encoder
//!
//! Repeatedly re-scans the sequence for the lowest-ranked learned merge,
//! applies it everywhere, and stops when no present pair was learned.

use std::sync::Arc;

use crate::{
    encoders::TokenEncoder,
    normalize::TextNormalizer,
    stats::{PairStats, merge_pair},
    types::TokenType,
    vocab::BpeVocab,
};

/// A [`TokenEncoder`] which applies merges in the order they were learned.
///
/// Replaying merges in rank order reproduces the merge path taken
/// during training for any text seen verbatim in the corpus.
#[derive(Debug, Clone)]
pub struct MergeScanEncoder<T: TokenType> {
    vocab: Arc<BpeVocab<T>>,
    normalizer: TextNormalizer,
}

impl<T: TokenType> MergeScanEncoder<T> {
    /// Create a new encoder.
    ///
    /// ## Arguments
    /// * `vocab` - The trained vocabulary.
    /// * `normalizer` - Normalization applied to text before encoding.
    pub fn new(
        vocab: Arc<BpeVocab<T>>,
        normalizer: TextNormalizer,
    ) -> Self {
        Self { vocab, normalizer }
    }

    /// The vocabulary.
    pub fn vocab(&self) -> &Arc<BpeVocab<T>> {
        &self.vocab
    }

    /// Encode raw bytes, skipping normalization.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, bytes)))]
    pub fn encode_bytes(
        &self,
        bytes: &[u8],
    ) -> Vec<T> {
        let mut tokens: Vec<T> = bytes.iter().map(|&b| <T as From<u8>>::from(b)).collect();

        while tokens.len() >= 2 {
            // Unlearned pairs have no rank, and are never selected.
            let Some((_, pair, token)) = PairStats::from_tokens(&tokens)
                .iter()
                .filter_map(|s| {
                    self.vocab
                        .lookup_ranked(&s.pair)
                        .map(|(rank, token)| (rank, s.pair, token))
                })
                .min_by_key(|&(rank, _, _)| rank)
            else {
                break;
            };

            tokens = merge_pair(&tokens, pair, token);
        }

        tokens
    }
}

impl<T: TokenType> TokenEncoder<T> for MergeScanEncoder<T> {
    fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        self.encode_bytes(self.normalizer.normalize(text).as_bytes())
    }
}
