//! # BPE Vocab Trainer

use crate::{
    errors::WMResult,
    normalize::TextNormalizer,
    stats::{PairStats, merge_pair},
    types::TokenType,
    vocab::{
        BpeVocab,
        MergeTable,
        TokenVocab,
        validators::{U8_SIZE, try_vocab_size},
    },
};

/// Options for [`BpeTrainer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BpeTrainerOptions {
    /// The target vocab size; must be >= 256.
    pub vocab_size: usize,

    /// Normalization applied to each sample.
    pub normalizer: TextNormalizer,
}

impl BpeTrainerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `vocab_size` - The target vocabulary size.
    pub fn new(vocab_size: usize) -> Self {
        Self {
            vocab_size,
            normalizer: TextNormalizer::default(),
        }
    }

    /// Sets the vocab size.
    ///
    /// ## Arguments
    /// * `vocab_size` - The desired vocabulary size; must be >= 256 (the size of the u8 space).
    pub fn with_vocab_size(
        self,
        vocab_size: usize,
    ) -> Self {
        Self { vocab_size, ..self }
    }

    /// Sets the sample normalizer.
    pub fn with_normalizer(
        self,
        normalizer: TextNormalizer,
    ) -> Self {
        Self { normalizer, ..self }
    }

    /// Initializes a [`BpeTrainer`] from these options.
    pub fn init(self) -> BpeTrainer {
        BpeTrainer::new(self)
    }
}

/// Trainer for learning byte pair encodings.
///
/// The trainer accumulates a corpus, then [`BpeTrainer::train`] consumes
/// it; the merge state only lives for the duration of that call.
#[derive(Debug, Clone)]
pub struct BpeTrainer {
    /// Trainer options.
    pub options: BpeTrainerOptions,

    /// The normalized corpus; samples are joined by ``"\n"``.
    corpus: String,

    /// The number of samples in the corpus; empty samples count.
    num_samples: usize,
}

impl BpeTrainer {
    /// Initializes a [`BpeTrainer`].
    pub fn new(options: BpeTrainerOptions) -> Self {
        Self {
            options,
            corpus: String::new(),
            num_samples: 0,
        }
    }

    /// The accumulated corpus.
    pub fn corpus(&self) -> &str {
        &self.corpus
    }

    /// The number of samples added so far.
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Append samples to the corpus.
    ///
    /// Samples are joined with ``"\n"``; a single sample is used verbatim.
    /// Every sample after the first gets a separator, even when empty.
    ///
    /// ## Arguments
    /// * `samples` - An iterator over string-like samples.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            if self.num_samples > 0 {
                self.corpus.push('\n');
            }
            self.corpus
                .push_str(&self.options.normalizer.normalize(sample.as_ref()));
            self.num_samples += 1;
        }
    }

    /// Trains a [`BpeVocab<T>`] on the accumulated corpus.
    ///
    /// Fails before doing any work if the vocab size is < 256,
    /// or does not fit `T`.
    ///
    /// If the corpus runs out of pairs, the returned vocab is smaller
    /// than requested; this is logged as a warning.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn train<T: TokenType>(self) -> WMResult<BpeVocab<T>> {
        let vocab_size = try_vocab_size::<T>(self.options.vocab_size)?;
        let num_merges = vocab_size - U8_SIZE;

        log::info!(
            "Starting BPE training: {} merges to compute over {} bytes",
            num_merges,
            self.corpus.len()
        );

        let mut tokens: Vec<T> = self.corpus.bytes().map(<T as From<u8>>::from).collect();

        let mut spans: TokenVocab<T> = TokenVocab::default();
        let mut merges: MergeTable<T> = MergeTable::default();

        let mut last_log_percent = 0;
        for merge_idx in 0..num_merges {
            let stats = PairStats::from_tokens(&tokens);
            let Some(&best) = stats.most_frequent() else {
                log::warn!(
                    "Training stopped early: no pairs left after {} of {} merges; vocab size is {}",
                    merge_idx,
                    num_merges,
                    U8_SIZE + merge_idx
                );
                break;
            };

            let new_token = spans.push_merge(best.pair)?;
            merges.insert(best.pair, new_token)?;
            log::debug!(
                "merging {:?} into a new token {} (count: {})",
                best.pair,
                new_token,
                best.count
            );

            tokens = merge_pair(&tokens, best.pair, new_token);

            // Log progress every 1%
            let merges_done = merge_idx + 1;
            let current_percent = (merges_done * 100) / num_merges;
            if current_percent > last_log_percent {
                log::info!(
                    "Progress: {}% ({}/{} merges) - Last merge: {:?} -> {} (frequency: {})",
                    current_percent,
                    merges_done,
                    num_merges,
                    best.pair,
                    new_token,
                    best.count
                );
                last_log_percent = current_percent;
            }
        }

        let vocab = BpeVocab::init(spans, merges)?;
        log::info!(
            "Finished training: {} merges completed",
            vocab.merges().len()
        );
        Ok(vocab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WordmergeError;

    fn train_text<T: TokenType>(
        text: &str,
        vocab_size: usize,
    ) -> BpeVocab<T> {
        let mut trainer = BpeTrainerOptions::new(vocab_size).init();
        trainer.update_from_samples([text]);
        trainer.train().unwrap()
    }

    #[test]
    fn test_options() {
        let options = BpeTrainerOptions::new(1000);
        assert_eq!(options.vocab_size, 1000);
        assert_eq!(options.normalizer, TextNormalizer::Identity);

        let options = options
            .with_vocab_size(2000)
            .with_normalizer(TextNormalizer::Lowercase);
        assert_eq!(options.vocab_size, 2000);
        assert_eq!(options.normalizer, TextNormalizer::Lowercase);
    }

    #[test]
    fn test_samples_are_joined() {
        let mut trainer = BpeTrainerOptions::new(300)
            .with_normalizer(TextNormalizer::Lowercase)
            .init();
        trainer.update_from_samples(["Hello", "World"]);
        trainer.update_from_samples(vec!["again".to_string()]);
        assert_eq!(trainer.corpus(), "hello\nworld\nagain");
        assert_eq!(trainer.num_samples(), 3);
    }

    #[test]
    fn test_empty_samples_keep_separators() {
        let mut trainer = BpeTrainerOptions::new(300).init();
        trainer.update_from_samples(["", "a"]);
        assert_eq!(trainer.corpus(), "\na");

        let mut trainer = BpeTrainerOptions::new(300).init();
        trainer.update_from_samples(["a", "", "b"]);
        assert_eq!(trainer.corpus(), "a\n\nb");

        let mut trainer = BpeTrainerOptions::new(300).init();
        trainer.update_from_samples(["", ""]);
        trainer.update_from_samples([""]);
        assert_eq!(trainer.corpus(), "\n\n");
        assert_eq!(trainer.num_samples(), 3);
    }

    #[test]
    fn test_vocab_size_too_small() {
        let mut trainer = BpeTrainerOptions::new(255).init();
        trainer.update_from_samples(["abc"]);
        assert!(matches!(
            trainer.train::<u32>(),
            Err(WordmergeError::VocabSizeTooSmall { size: 255 })
        ));

        assert!(matches!(
            BpeTrainerOptions::new(300).init().train::<u8>(),
            Err(WordmergeError::VocabSizeOverflow { size: 300 })
        ));
    }

    #[test]
    fn test_worked_example() {
        let vocab: BpeVocab<u32> = train_text("aaabdaaabac", 258);

        // "aa" occurs 4 times; then (256, 'a') and ('a', 'b') tie at 2,
        // and (256, 'a') is seen first.
        assert_eq!(vocab.merges().merges(), &[((97, 97), 256), ((256, 97), 257)]);
        assert_eq!(vocab.get_span(256), Some("aa".as_bytes()));
        assert_eq!(vocab.get_span(257), Some("aaa".as_bytes()));
        assert_eq!(vocab.len(), 258);
    }

    #[test]
    fn test_monotonic_growth() {
        let text = "the cat sat on the mat with the hat";

        let small: BpeVocab<u32> = train_text(text, 260);
        let large: BpeVocab<u32> = train_text(text, 266);

        assert_eq!(small.len(), 260);
        assert_eq!(large.len(), 266);

        // The first k merges of a longer run are the k merges of a shorter run.
        assert_eq!(
            small.merges().merges(),
            &large.merges().merges()[..small.merges().len()]
        );
        for (t, span) in small.tokens().iter() {
            assert_eq!(large.get_span(t), Some(span));
        }
    }

    #[test]
    fn test_deterministic() {
        let text = "low lower lowest newer newest wider widest";

        let a: BpeVocab<u32> = train_text(text, 290);
        let b: BpeVocab<u32> = train_text(text, 290);
        assert_eq!(a, b);
    }

    #[test]
    fn test_early_stop() {
        let vocab: BpeVocab<u16> = train_text("ab", 300);

        assert_eq!(vocab.merges().merges(), &[((97, 98), 256)]);
        assert_eq!(vocab.len(), 257);

        let vocab: BpeVocab<u16> = train_text("", 300);
        assert_eq!(vocab.len(), 256);
    }

    #[test]
    fn test_no_merges_requested() {
        let vocab: BpeVocab<u32> = train_text("hello hello", 256);
        assert!(vocab.merges().is_empty());
        assert_eq!(vocab.len(), 256);
    }
}
