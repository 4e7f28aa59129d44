//! # Pair Merge Rewrite

use crate::types::{Pair, TokenType};

/// Replace every occurrence of `pair` in `tokens` with `new_token`.
///
/// Matches are taken left to right and never overlap: after a match,
/// scanning resumes past both consumed tokens.
pub fn merge_pair<T: TokenType>(
    tokens: &[T],
    pair: Pair<T>,
    new_token: T,
) -> Vec<T> {
    let mut merged = Vec::with_capacity(tokens.len());

    let mut i = 0;
    while i < tokens.len() {
        if i + 1 < tokens.len() && tokens[i] == pair.0 && tokens[i + 1] == pair.1 {
            merged.push(new_token);
            i += 2;
        } else {
            merged.push(tokens[i]);
            i += 1;
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_pair() {
        let tokens: Vec<u32> = "aaabdaaabac".bytes().map(u32::from).collect();

        assert_eq!(
            merge_pair(&tokens, (97, 97), 256),
            vec![256, 97, 98, 100, 256, 97, 98, 97, 99]
        );
    }

    #[test]
    fn test_merge_pair_overlap() {
        assert_eq!(merge_pair::<u16>(&[1, 1, 1], (1, 1), 9), vec![9, 1]);
        assert_eq!(merge_pair::<u16>(&[1, 1, 1, 1], (1, 1), 9), vec![9, 9]);
    }

    #[test]
    fn test_merge_pair_no_match() {
        assert_eq!(merge_pair::<u16>(&[], (1, 2), 9), Vec::<u16>::new());
        assert_eq!(merge_pair::<u16>(&[1], (1, 2), 9), vec![1]);
        assert_eq!(merge_pair::<u16>(&[2, 1], (1, 2), 9), vec![2, 1]);
    }
}
