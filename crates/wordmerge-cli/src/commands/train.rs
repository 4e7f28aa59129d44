use std::io::BufRead;

use wordmerge::{BpeTokenizer, TokenizerOptions, tokenizer::DEFAULT_VOCAB_SIZE};

use crate::{input_output::open_path_reader, logging::LogArgs};

/// Args for the train command.
#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    /// Input text files, one sample per line; "-" reads stdin.
    #[arg(required = true)]
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Target vocab size; must be >= 256.
    #[arg(long, default_value_t = DEFAULT_VOCAB_SIZE)]
    vocab_size: usize,

    /// Lowercase text before training.
    #[arg(long)]
    lowercase: bool,

    /// Vocabulary JSON output file.
    #[arg(long)]
    vocab_out: String,

    /// Merge table output file.
    #[arg(long)]
    merges_out: String,
}

impl TrainArgs {
    /// Run the train command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let mut tokenizer: BpeTokenizer<u32> = TokenizerOptions::new(self.vocab_size)
            .with_lowercase(self.lowercase)
            .build()?;

        let mut samples = Vec::new();
        log::info!("Reading files:");
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
            for line in open_path_reader(path)?.lines() {
                samples.push(line?);
            }
        }

        log::info!("Training tokenizer on {} samples...", samples.len());
        tokenizer.train_from_samples(&samples)?;
        log::info!("Vocabulary size: {}", tokenizer.vocab_size());

        tokenizer.save(&self.vocab_out, &self.merges_out)?;

        Ok(())
    }
}
