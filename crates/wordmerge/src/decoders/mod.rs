//! # Token Decoders
//!
//! A [`TokenDecoder`] turns tokens back into bytes or text.
//! Unknown token ids are errors; invalid UTF-8 is not, and decodes to
//! U+FFFD replacement characters.

mod dictionary_decoder;
mod token_decoder;

#[doc(inline)]
pub use dictionary_decoder::DictionaryDecoder;
#[doc(inline)]
pub use token_decoder::{TokenDecoder, string_from_utf8_lossy};
