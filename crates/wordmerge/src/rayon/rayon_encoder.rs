//! # Parallel Encoder

use core::marker::PhantomData;

use rayon::prelude::*;

use crate::{encoders::TokenEncoder, types::TokenType};

/// Batch-Level Parallel Encoder Wrapper.
///
/// Enables ``rayon`` encoding of batches.
#[derive(Debug, Clone)]
pub struct ParallelRayonEncoder<T: TokenType, E: TokenEncoder<T>> {
    /// Inner encoder.
    pub inner: E,

    _marker: PhantomData<T>,
}

impl<T, E> ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The token encoder to wrap.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<T, E> TokenEncoder<T> for ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        self.inner.encode(text)
    }

    fn encode_batch(
        &self,
        batch: &[&str],
    ) -> Vec<Vec<T>> {
        batch.par_iter().map(|text| self.inner.encode(text)).collect()
    }
}
