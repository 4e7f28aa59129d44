use std::sync::Arc;

use crate::{
    decoders::{DictionaryDecoder, TokenDecoder},
    encoders::{MergeScanEncoder, TokenEncoder},
    errors::WMResult,
    normalize::TextNormalizer,
    tokenizer::BpeTokenizer,
    training::BpeTrainerOptions,
    types::TokenType,
    vocab::BpeVocab,
};

/// The default target vocabulary size.
pub const DEFAULT_VOCAB_SIZE: usize = 300;

/// Options for configuring a [`BpeTokenizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// The target vocab size used by training; must be >= 256.
    pub vocab_size: usize,

    /// Lowercase text before training and encoding.
    pub lowercase: bool,

    /// Request parallel batch encoders / decoders.
    ///
    /// Has no effect without the ``rayon`` feature.
    pub parallel: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self::new(DEFAULT_VOCAB_SIZE)
    }
}

impl TokenizerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `vocab_size` - The target vocabulary size.
    pub fn new(vocab_size: usize) -> Self {
        Self {
            vocab_size,
            lowercase: false,
            parallel: cfg!(feature = "rayon"),
        }
    }

    /// Sets the target vocab size.
    pub fn with_vocab_size(
        self,
        vocab_size: usize,
    ) -> Self {
        Self { vocab_size, ..self }
    }

    /// Sets the lowercase normalization flag.
    pub fn with_lowercase(
        self,
        lowercase: bool,
    ) -> Self {
        Self { lowercase, ..self }
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request threaded implementations.
    pub fn with_parallel(
        self,
        parallel: bool,
    ) -> Self {
        Self { parallel, ..self }
    }

    /// The text normalizer selected by these options.
    pub fn normalizer(&self) -> TextNormalizer {
        TextNormalizer::from_lowercase(self.lowercase)
    }

    /// The trainer options selected by these options.
    pub fn trainer_options(&self) -> BpeTrainerOptions {
        BpeTrainerOptions::new(self.vocab_size).with_normalizer(self.normalizer())
    }

    /// Build a [`TokenEncoder`] for the given vocab.
    pub fn build_encoder<T: TokenType>(
        &self,
        vocab: Arc<BpeVocab<T>>,
    ) -> Arc<dyn TokenEncoder<T>> {
        let enc = MergeScanEncoder::new(vocab, self.normalizer());

        #[cfg(feature = "rayon")]
        if self.parallel {
            return Arc::new(crate::rayon::ParallelRayonEncoder::new(enc));
        }

        Arc::new(enc)
    }

    /// Build a [`TokenDecoder`] for the given vocab.
    pub fn build_decoder<T: TokenType>(
        &self,
        vocab: Arc<BpeVocab<T>>,
    ) -> Arc<dyn TokenDecoder<T>> {
        let dec = DictionaryDecoder::new(vocab);

        #[cfg(feature = "rayon")]
        if self.parallel {
            return Arc::new(crate::rayon::ParallelRayonDecoder::new(dec));
        }

        Arc::new(dec)
    }

    /// Build an untrained [`BpeTokenizer`].
    ///
    /// Fails if the vocab size is < 256, or does not fit `T`.
    pub fn build<T: TokenType>(self) -> WMResult<BpeTokenizer<T>> {
        BpeTokenizer::new(self)
    }
}
