//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for parallel batch encoders and decoders.
//!
//! A trained vocabulary is read-only, so batch items are independent.

mod rayon_decoder;
mod rayon_encoder;

#[doc(inline)]
pub use rayon_decoder::ParallelRayonDecoder;
#[doc(inline)]
pub use rayon_encoder::ParallelRayonEncoder;
