mod decode;
mod encode;
mod train;

/// Subcommands for wordmerge.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Train a new model.
    Train(train::TrainArgs),

    /// Encode text lines into token ids.
    Encode(encode::EncodeArgs),

    /// Decode token id lines into text.
    ///
    /// Each input line is written followed by a newline. Ids which decode to
    /// a newline (such as 10) add output lines; lines from `encode` never
    /// contain them.
    Decode(decode::DecodeArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Train(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
        }
    }
}
