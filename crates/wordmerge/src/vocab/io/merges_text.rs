//! # Merge Table Text IO
//!
//! One merge per line, in rank order:
//! ```terminaloutput
//! {LEFT}\t{RIGHT}\t{TOKEN}
//! ```

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{WMResult, WordmergeError},
    types::TokenType,
    vocab::MergeTable,
};

fn parse_token<T: TokenType>(
    field: &str,
    line_no: usize,
) -> WMResult<T> {
    let id: u64 = field.trim().parse().map_err(|e: core::num::ParseIntError| {
        WordmergeError::Parse(format!("line {line_no}: {field:?}: {e}"))
    })?;
    T::from_u64(id).ok_or_else(|| {
        WordmergeError::Parse(format!("line {line_no}: token {id} out of range"))
    })
}

/// Read a [`MergeTable`] from a merges line reader.
///
/// Blank lines are skipped.
pub fn read_merges<T, R>(reader: R) -> WMResult<MergeTable<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut merges = MergeTable::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 3 {
            return Err(WordmergeError::Parse(format!(
                "line {line_no}: expected 3 tab-separated fields, found {}",
                fields.len()
            )));
        }

        let a: T = parse_token(fields[0], line_no)?;
        let b: T = parse_token(fields[1], line_no)?;
        let t: T = parse_token(fields[2], line_no)?;

        merges.insert((a, b), t)?;
    }

    Ok(merges)
}

/// Write a [`MergeTable`] to a [`Write`] writer, in rank order.
pub fn write_merges<T, W>(
    merges: &MergeTable<T>,
    writer: &mut W,
) -> WMResult<()>
where
    T: TokenType,
    W: Write,
{
    for &((a, b), t) in merges.iter() {
        writeln!(writer, "{a}\t{b}\t{t}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Save a [`MergeTable`] to a merges file.
pub fn save_merges_path<T, P>(
    merges: &MergeTable<T>,
    path: P,
) -> WMResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_merges(merges, &mut writer)
}

/// Load a [`MergeTable`] from a merges file.
pub fn load_merges_path<T, P>(path: P) -> WMResult<MergeTable<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    read_merges(BufReader::new(File::open(path)?))
}
