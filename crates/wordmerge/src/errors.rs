//! # Error Types

/// Errors from wordmerge operations.
#[derive(Debug, thiserror::Error)]
pub enum WordmergeError {
    /// Vocab size is below the minimum (256, the u8 space).
    #[error("vocab size ({size}) must be >= 256")]
    VocabSizeTooSmall {
        /// The vocab size that was too small.
        size: usize,
    },

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// A token id has no vocabulary entry.
    #[error("unknown token id: {token}")]
    UnknownToken {
        /// The offending token id.
        token: String,
    },

    /// Vocabulary data is inconsistent.
    #[error("vocab conflict: {0}")]
    VocabConflict(String),

    /// Parse error (integer fields, merge lines, vocab values).
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl WordmergeError {
    /// Build an [`WordmergeError::UnknownToken`] for `token`.
    pub fn unknown_token<T: core::fmt::Display>(token: T) -> Self {
        Self::UnknownToken {
            token: token.to_string(),
        }
    }
}

/// Result type for wordmerge operations.
pub type WMResult<T> = core::result::Result<T, WordmergeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            WordmergeError::VocabSizeTooSmall { size: 100 }.to_string(),
            "vocab size (100) must be >= 256"
        );
        assert_eq!(
            WordmergeError::unknown_token(9000_u32).to_string(),
            "unknown token id: 9000"
        );
    }
}
