//! # Parallel Decoder

use core::marker::PhantomData;

use rayon::prelude::*;

use crate::{decoders::TokenDecoder, errors::WMResult, types::TokenType};

/// Batch-Level Parallel Decoder Wrapper.
///
/// Enables ``rayon`` decoding of batches.
#[derive(Debug, Clone)]
pub struct ParallelRayonDecoder<T: TokenType, D: TokenDecoder<T>> {
    /// Inner decoder.
    pub inner: D,

    _marker: PhantomData<T>,
}

impl<T, D> ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    /// Create a new parallel decoder.
    ///
    /// ## Arguments
    /// * `inner` - The token decoder to wrap.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<T, D> TokenDecoder<T> for ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    fn try_decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> WMResult<Vec<u8>> {
        self.inner.try_decode_to_bytes(tokens)
    }

    fn try_decode_batch_to_bytes(
        &self,
        batch: &[&[T]],
    ) -> WMResult<Vec<Vec<u8>>> {
        batch
            .par_iter()
            .map(|tokens| self.inner.try_decode_to_bytes(tokens))
            .collect()
    }

    fn try_decode_batch_to_strings(
        &self,
        batch: &[&[T]],
    ) -> WMResult<Vec<String>> {
        batch
            .par_iter()
            .map(|tokens| self.inner.try_decode_to_string(tokens))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        decoders::DictionaryDecoder,
        errors::WordmergeError,
        types::static_is_send_sync_check,
        vocab::{BpeVocab, MergeTable},
    };

    #[test]
    fn test_decoder() {
        let merges = MergeTable::<u32>::try_from_merges([((104, 105), 256)]).unwrap();
        let vocab = Arc::new(BpeVocab::from_merges(merges).unwrap());

        let decoder = ParallelRayonDecoder::new(DictionaryDecoder::new(vocab));
        static_is_send_sync_check(&decoder);

        let batch: Vec<&[u32]> = vec![&[256, 33], &[], &[0xFF]];
        assert_eq!(
            decoder.try_decode_batch_to_strings(&batch).unwrap(),
            vec!["hi!".to_string(), String::new(), "\u{FFFD}".to_string()]
        );

        let batch: Vec<&[u32]> = vec![&[256], &[257]];
        assert!(matches!(
            decoder.try_decode_batch_to_bytes(&batch),
            Err(WordmergeError::UnknownToken { .. })
        ));
    }
}
