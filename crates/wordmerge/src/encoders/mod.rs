//! # Token Encoders
//!
//! A [`TokenEncoder`] turns text into tokens using an already-trained
//! [`crate::vocab::BpeVocab`]; encoding never learns new merges.

mod merge_scan_encoder;
mod token_encoder;

#[doc(inline)]
pub use merge_scan_encoder::MergeScanEncoder;
#[doc(inline)]
pub use token_encoder::TokenEncoder;
