mod commands;
mod input_output;
mod logging;
mod model_args;

use clap::Parser;
use commands::Commands;

/// wordmerge BPE tokenizer.
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args() {
        Args::command().debug_assert();

        let args = Args::try_parse_from([
            "wordmerge",
            "train",
            "--vocab-size",
            "512",
            "--vocab-out",
            "v.json",
            "--merges-out",
            "m.txt",
            "a.txt",
            "b.txt",
        ])
        .unwrap();
        assert!(matches!(args.command, Commands::Train(_)));

        assert!(Args::try_parse_from(["wordmerge", "encode", "--vocab", "v.json"]).is_err());
    }
}
