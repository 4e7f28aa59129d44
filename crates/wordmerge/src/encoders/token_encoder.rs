//! # Token Encoder Trait

use crate::types::TokenType;

/// Trait for token encoders.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Encode text into tokens.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// The token sequence; empty text yields no tokens.
    fn encode(
        &self,
        text: &str,
    ) -> Vec<T>;

    /// Encode a batch of texts.
    ///
    /// ## Arguments
    /// * `batch` - The texts to encode.
    ///
    /// ## Returns
    /// One token sequence per text, in order.
    fn encode_batch(
        &self,
        batch: &[&str],
    ) -> Vec<Vec<T>> {
        batch.iter().map(|text| self.encode(text)).collect()
    }
}
