//! # Text Normalization
//!
//! Applied to text before training and before encoding.

use std::borrow::Cow;

/// A text normalization step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextNormalizer {
    /// Text is used as-is.
    #[default]
    Identity,

    /// Simple Unicode case folding via [`str::to_lowercase`].
    Lowercase,
}

impl TextNormalizer {
    /// Select a normalizer from a lowercase flag.
    pub fn from_lowercase(lowercase: bool) -> Self {
        if lowercase {
            TextNormalizer::Lowercase
        } else {
            TextNormalizer::Identity
        }
    }

    /// Normalize `text`; borrows when nothing changes.
    pub fn normalize<'a>(
        &self,
        text: &'a str,
    ) -> Cow<'a, str> {
        match self {
            TextNormalizer::Identity => Cow::Borrowed(text),
            TextNormalizer::Lowercase => {
                // Titlecase letters (e.g. 'ǅ') fold but are not uppercase.
                if text
                    .chars()
                    .any(|c| c.to_lowercase().ne(core::iter::once(c)))
                {
                    Cow::Owned(text.to_lowercase())
                } else {
                    Cow::Borrowed(text)
                }
            }
        }
    }
}
