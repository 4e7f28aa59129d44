use std::io::{BufRead, Write};

use wordmerge::BpeTokenizer;

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    model_args::ModelArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    model: ModelArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let tokenizer = self.model.load_tokenizer()?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_encode(&mut reader, &mut writer, &tokenizer)
    }
}

/// Writes one line of space separated ids per input line.
fn run_encode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &BpeTokenizer<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let tokens = tokenizer.encode(&line?);

        for (idx, token) in tokens.iter().enumerate() {
            write!(writer, "{}{}", if idx == 0 { "" } else { " " }, token)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}
