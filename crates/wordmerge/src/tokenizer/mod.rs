//! # Combined Tokenizer

mod bpe_tokenizer;
mod tokenizer_options;

#[doc(inline)]
pub use bpe_tokenizer::*;
#[doc(inline)]
pub use tokenizer_options::*;
