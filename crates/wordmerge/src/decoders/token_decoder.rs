//! # Token Decoder Trait

use crate::{errors::WMResult, types::TokenType};

/// Convert bytes to a [`String`], replacing invalid UTF-8 with U+FFFD.
///
/// Valid input is converted without copying.
pub fn string_from_utf8_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// Trait for token decoders.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decodes tokens into bytes.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    ///
    /// ## Returns
    /// The concatenated token spans, or an error naming the first unknown token.
    fn try_decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> WMResult<Vec<u8>>;

    /// Decodes a batch of token sequences into bytes.
    fn try_decode_batch_to_bytes(
        &self,
        batch: &[&[T]],
    ) -> WMResult<Vec<Vec<u8>>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_bytes(tokens))
            .collect()
    }

    /// Decodes tokens into a string.
    ///
    /// UTF-8 lossy decoding is used to handle invalid UTF-8 sequences.
    fn try_decode_to_string(
        &self,
        tokens: &[T],
    ) -> WMResult<String> {
        self.try_decode_to_bytes(tokens).map(string_from_utf8_lossy)
    }

    /// Decodes a batch of token sequences into strings.
    ///
    /// UTF-8 lossy decoding is used to handle invalid UTF-8 sequences.
    fn try_decode_batch_to_strings(
        &self,
        batch: &[&[T]],
    ) -> WMResult<Vec<String>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_string(tokens))
            .collect()
    }
}
