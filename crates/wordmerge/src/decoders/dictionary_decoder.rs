//! # Dictionary ``{ T -> Vec<u8> }`` Token Decoder

use std::sync::Arc;

use crate::{
    decoders::TokenDecoder,
    errors::{WMResult, WordmergeError},
    types::TokenType,
    vocab::BpeVocab,
};

/// A [`TokenDecoder`] which looks up each token's span in the vocabulary.
#[derive(Debug, Clone)]
pub struct DictionaryDecoder<T: TokenType> {
    vocab: Arc<BpeVocab<T>>,
}

impl<T: TokenType> DictionaryDecoder<T> {
    /// Build a [`DictionaryDecoder`] over a vocabulary.
    pub fn new(vocab: Arc<BpeVocab<T>>) -> Self {
        Self { vocab }
    }

    /// The vocabulary.
    pub fn vocab(&self) -> &Arc<BpeVocab<T>> {
        &self.vocab
    }
}

impl<T: TokenType> TokenDecoder<T> for DictionaryDecoder<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens)))]
    fn try_decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> WMResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(tokens.len() * 2);
        for &t in tokens {
            let span = self
                .vocab
                .get_span(t)
                .ok_or_else(|| WordmergeError::unknown_token(t))?;
            buf.extend_from_slice(span);
        }
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{types::static_is_send_sync_check, vocab::MergeTable};

    fn test_decoder() -> DictionaryDecoder<u16> {
        let merges = MergeTable::try_from_merges([
            ((104, 105), 256),
            ((0xE2, 0x98), 257),
            ((257, 0x83), 258),
        ])
        .unwrap();
        DictionaryDecoder::new(Arc::new(BpeVocab::from_merges(merges).unwrap()))
    }

    #[test]
    fn test_decode() {
        let decoder = test_decoder();
        static_is_send_sync_check(&decoder);

        assert_eq!(decoder.try_decode_to_string(&[]).unwrap(), "");
        assert_eq!(decoder.try_decode_to_bytes(&[256, 33]).unwrap(), b"hi!".to_vec());
        assert_eq!(decoder.try_decode_to_string(&[256, 32, 258]).unwrap(), "hi ☃");
        assert_eq!(decoder.try_decode_to_string(&[257, 0x83]).unwrap(), "☃");
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let decoder = test_decoder();

        assert_eq!(decoder.try_decode_to_string(&[257]).unwrap(), "\u{FFFD}");
        assert_eq!(
            decoder.try_decode_to_string(&[256, 0xFF, 256]).unwrap(),
            "hi\u{FFFD}hi"
        );
    }

    #[test]
    fn test_decode_unknown_token() {
        let decoder = test_decoder();

        let err = decoder.try_decode_to_string(&[256, 259]).unwrap_err();
        assert!(matches!(
            &err,
            WordmergeError::UnknownToken { token } if token == "259"
        ));
    }

    #[test]
    fn test_decode_batch() {
        let decoder = test_decoder();

        let batch: Vec<&[u16]> = vec![&[256], &[], &[258]];
        assert_eq!(
            decoder.try_decode_batch_to_strings(&batch).unwrap(),
            vec!["hi".to_string(), String::new(), "☃".to_string()]
        );
        assert_eq!(
            decoder.try_decode_batch_to_bytes(&batch).unwrap()[0],
            b"hi".to_vec()
        );

        let batch: Vec<&[u16]> = vec![&[256], &[4000]];
        assert!(decoder.try_decode_batch_to_strings(&batch).is_err());
    }
}
