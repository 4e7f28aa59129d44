use wordmerge::{BpeTokenizer, TokenizerOptions};

/// Trained model selection arg group.
#[derive(clap::Args, Debug)]
pub struct ModelArgs {
    /// Vocabulary JSON file.
    #[arg(long)]
    vocab: String,

    /// Merge table file.
    #[arg(long)]
    merges: String,

    /// Lowercase text before encoding.
    #[arg(long)]
    lowercase: bool,
}

impl ModelArgs {
    /// Load the selected tokenizer.
    pub fn load_tokenizer(&self) -> Result<BpeTokenizer<u32>, Box<dyn std::error::Error>> {
        let mut tokenizer = TokenizerOptions::default()
            .with_lowercase(self.lowercase)
            .build()?;
        tokenizer.load(&self.vocab, &self.merges)?;

        log::info!("Loaded tokenizer; vocab size: {}", tokenizer.vocab_size());
        Ok(tokenizer)
    }
}
