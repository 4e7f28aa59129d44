use std::{fmt, path::Path, sync::Arc};

use crate::{
    decoders::{TokenDecoder, string_from_utf8_lossy},
    encoders::TokenEncoder,
    errors::{WMResult, WordmergeError},
    tokenizer::TokenizerOptions,
    types::TokenType,
    vocab::{
        BpeVocab,
        io::{load_bpe_vocab_paths, save_bpe_vocab_paths},
        validators::try_vocab_size,
    },
};

/// Byte Pair Encoding Tokenizer.
///
/// Combines:
///  * [`TokenizerOptions`],
///  * a [`BpeVocab`],
///  * a [`TokenEncoder`], and
///  * a [`TokenDecoder`] over that vocab.
///
/// A new tokenizer knows only the 256 byte tokens; [`train`](Self::train)
/// and [`load`](Self::load) replace the whole vocabulary.
/// Encoding and decoding never mutate the tokenizer.
///
/// ## Example
///
/// ```rust
/// use wordmerge::{BpeTokenizer, TokenizerOptions};
///
/// let mut tok: BpeTokenizer = TokenizerOptions::new(260).build()?;
/// tok.train("the cat in the hat")?;
/// assert_eq!(tok.vocab_size(), 260);
///
/// let tokens = tok.encode("the hat");
/// assert_eq!(tok.decode(&tokens)?, "the hat");
/// # Ok::<(), wordmerge::WordmergeError>(())
/// ```
#[derive(Clone)]
pub struct BpeTokenizer<T: TokenType = u32> {
    options: TokenizerOptions,
    vocab: Arc<BpeVocab<T>>,
    encoder: Arc<dyn TokenEncoder<T>>,
    decoder: Arc<dyn TokenDecoder<T>>,
}

impl<T: TokenType> fmt::Debug for BpeTokenizer<T> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("BpeTokenizer")
            .field("options", &self.options)
            .field("vocab_size", &self.vocab.len())
            .finish()
    }
}

impl<T: TokenType> BpeTokenizer<T> {
    /// Create an untrained tokenizer.
    ///
    /// Fails if the vocab size is < 256, or does not fit `T`.
    pub fn new(options: TokenizerOptions) -> WMResult<Self> {
        Self::from_vocab(options, BpeVocab::default())
    }

    /// Create a tokenizer over an existing vocab.
    ///
    /// ## Arguments
    /// * `options` - The tokenizer options; the vocab size is validated.
    /// * `vocab` - The vocabulary to install.
    pub fn from_vocab(
        options: TokenizerOptions,
        vocab: BpeVocab<T>,
    ) -> WMResult<Self> {
        try_vocab_size::<T>(options.vocab_size)?;

        let vocab = Arc::new(vocab);
        Ok(Self {
            options,
            encoder: options.build_encoder(vocab.clone()),
            decoder: options.build_decoder(vocab.clone()),
            vocab,
        })
    }

    /// The tokenizer options.
    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// The installed vocabulary.
    pub fn vocab(&self) -> &Arc<BpeVocab<T>> {
        &self.vocab
    }

    /// The effective vocab size.
    ///
    /// This is smaller than the configured size when training stopped early.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// The installed encoder.
    pub fn encoder(&self) -> &Arc<dyn TokenEncoder<T>> {
        &self.encoder
    }

    /// The installed decoder.
    pub fn decoder(&self) -> &Arc<dyn TokenDecoder<T>> {
        &self.decoder
    }

    fn install(
        &mut self,
        vocab: BpeVocab<T>,
    ) {
        let vocab = Arc::new(vocab);
        self.encoder = self.options.build_encoder(vocab.clone());
        self.decoder = self.options.build_decoder(vocab.clone());
        self.vocab = vocab;
    }

    /// Train on a single corpus, replacing the vocabulary.
    pub fn train(
        &mut self,
        text: &str,
    ) -> WMResult<()> {
        self.train_from_samples([text])
    }

    /// Train on samples joined with ``"\n"``, replacing the vocabulary.
    ///
    /// On error the installed vocabulary is unchanged.
    pub fn train_from_samples<I>(
        &mut self,
        samples: I,
    ) -> WMResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut trainer = self.options.trainer_options().init();
        trainer.update_from_samples(samples);
        let vocab = trainer.train::<T>()?;
        self.install(vocab);
        Ok(())
    }

    /// Encode text into tokens.
    pub fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        self.encoder.encode(text)
    }

    /// Encode a batch of texts.
    pub fn encode_batch(
        &self,
        batch: &[&str],
    ) -> Vec<Vec<T>> {
        self.encoder.encode_batch(batch)
    }

    /// Decode tokens into text.
    ///
    /// Invalid UTF-8 decodes to U+FFFD; unknown tokens are an error.
    pub fn decode(
        &self,
        tokens: &[T],
    ) -> WMResult<String> {
        self.decoder.try_decode_to_string(tokens)
    }

    /// Decode tokens into bytes.
    pub fn decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> WMResult<Vec<u8>> {
        self.decoder.try_decode_to_bytes(tokens)
    }

    /// Decode a batch of token sequences.
    pub fn decode_batch(
        &self,
        batch: &[&[T]],
    ) -> WMResult<Vec<String>> {
        self.decoder.try_decode_batch_to_strings(batch)
    }

    /// Encode text, and render each token's span as a string.
    pub fn tokenize(
        &self,
        text: &str,
    ) -> WMResult<Vec<String>> {
        self.encode(text)
            .into_iter()
            .map(|t| {
                self.vocab
                    .get_span(t)
                    .map(|span| string_from_utf8_lossy(span.to_vec()))
                    .ok_or_else(|| WordmergeError::unknown_token(t))
            })
            .collect()
    }

    /// Save the vocabulary and merge table.
    pub fn save<V, M>(
        &self,
        vocab_path: V,
        merges_path: M,
    ) -> WMResult<()>
    where
        V: AsRef<Path>,
        M: AsRef<Path>,
    {
        save_bpe_vocab_paths(&*self.vocab, vocab_path, merges_path)
    }

    /// Load the vocabulary and merge table, replacing the installed vocab.
    ///
    /// Both files are read and validated before anything is replaced;
    /// on error the tokenizer is unchanged.
    pub fn load<V, M>(
        &mut self,
        vocab_path: V,
        merges_path: M,
    ) -> WMResult<()>
    where
        V: AsRef<Path>,
        M: AsRef<Path>,
    {
        let vocab = load_bpe_vocab_paths(vocab_path, merges_path)?;
        self.install(vocab);
        Ok(())
    }
}
