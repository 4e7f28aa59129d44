//! # JSON Vocabulary IO
//!
//! The vocabulary file is a JSON object keyed by token id:
//! ```json
//! {"0": "\u0000", "97": "a", "200": [200], "256": "th", "301": [226, 152]}
//! ```
//!
//! Spans which are valid UTF-8 are written as strings;
//! all others as lists of byte values.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{WMResult, WordmergeError},
    types::TokenType,
    vocab::TokenVocab,
};

/// A single vocabulary value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonSpan {
    /// A span which is valid UTF-8.
    Text(String),

    /// A span which is not valid UTF-8.
    Bytes(Vec<u8>),
}

impl JsonSpan {
    /// Pick the representation for a span.
    pub fn from_span(span: &[u8]) -> Self {
        match core::str::from_utf8(span) {
            Ok(s) => JsonSpan::Text(s.to_string()),
            Err(_) => JsonSpan::Bytes(span.to_vec()),
        }
    }

    /// Convert back to the span bytes.
    pub fn into_span(self) -> Vec<u8> {
        match self {
            JsonSpan::Text(s) => s.into_bytes(),
            JsonSpan::Bytes(b) => b,
        }
    }
}

/// Write a [`TokenVocab`] as a JSON object.
pub fn write_json_vocab<T, W>(
    vocab: &TokenVocab<T>,
    writer: &mut W,
) -> WMResult<()>
where
    T: TokenType,
    W: Write,
{
    let entries: BTreeMap<usize, JsonSpan> = vocab
        .spans()
        .iter()
        .enumerate()
        .map(|(idx, span)| (idx, JsonSpan::from_span(span)))
        .collect();

    serde_json::to_writer(&mut *writer, &entries)?;
    writer.flush()?;
    Ok(())
}

/// Read a [`TokenVocab`] from a JSON object.
///
/// Keys must cover ``0..n`` exactly.
pub fn read_json_vocab<T, R>(reader: R) -> WMResult<TokenVocab<T>>
where
    T: TokenType,
    R: Read,
{
    let entries: BTreeMap<usize, JsonSpan> = serde_json::from_reader(reader)?;

    let mut spans = Vec::with_capacity(entries.len());
    for (expected, (idx, span)) in entries.into_iter().enumerate() {
        if idx != expected {
            return Err(WordmergeError::VocabConflict(format!(
                "vocab is missing token id {expected}"
            )));
        }
        spans.push(span.into_span());
    }

    TokenVocab::from_spans(spans)
}

/// Save a [`TokenVocab`] to a JSON file.
pub fn save_json_vocab_path<T, P>(
    vocab: &TokenVocab<T>,
    path: P,
) -> WMResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_json_vocab(vocab, &mut writer)
}

/// Load a [`TokenVocab`] from a JSON file.
pub fn load_json_vocab_path<T, P>(path: P) -> WMResult<TokenVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    read_json_vocab(BufReader::new(File::open(path)?))
}
