use std::io::{BufRead, Write};

use wordmerge::{BpeTokenizer, WordmergeError};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    model_args::ModelArgs,
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    model: ModelArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let tokenizer = self.model.load_tokenizer()?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_decode(&mut reader, &mut writer, &tokenizer)
    }
}

fn parse_ids(
    line: &str,
    line_no: usize,
) -> Result<Vec<u32>, WordmergeError> {
    line.split_whitespace()
        .map(|s| {
            s.parse().map_err(|e| {
                WordmergeError::Parse(format!("line {line_no}: invalid token id {s:?}: {e}"))
            })
        })
        .collect()
}

/// Writes the decoded text of each input line of whitespace separated ids,
/// followed by a newline.
///
/// Output lines match input lines unless the decoded text itself contains
/// newlines; text is written as decoded, not escaped.
fn run_decode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &BpeTokenizer<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    for (idx, line) in reader.lines().enumerate() {
        let tokens = parse_ids(&line?, idx + 1)?;
        writeln!(writer, "{}", tokenizer.decode(&tokens)?)?;
    }
    writer.flush()?;
    Ok(())
}
