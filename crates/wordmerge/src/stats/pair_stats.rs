//! # Adjacent Pair Counts

use core::cmp::Reverse;

use crate::types::{Pair, TokenType, WMHashMap, hash_map_with_capacity};

/// Occurrence info for one distinct [`Pair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairStat<T: TokenType> {
    /// The pair.
    pub pair: Pair<T>,

    /// The number of (possibly overlapping) occurrences.
    pub count: usize,

    /// The window index of the first occurrence.
    pub first_index: usize,
}

impl<T: TokenType> PairStat<T> {
    /// The selection key.
    ///
    /// Max by count; ties go to the earliest first occurrence.
    pub fn selection_key(&self) -> (usize, Reverse<usize>) {
        (self.count, Reverse(self.first_index))
    }
}

/// Counts of every adjacent pair in a token sequence.
///
/// Pairs are kept in first-occurrence order, so iteration and
/// tie-breaking never depend on hash ordering.
#[derive(Debug, Clone, Default)]
pub struct PairStats<T: TokenType> {
    /// Stats in first-occurrence order.
    stats: Vec<PairStat<T>>,

    /// ``pair -> stats[idx]``.
    index: WMHashMap<Pair<T>, usize>,
}

impl<T: TokenType> PairStats<T> {
    /// Count the adjacent pairs of `tokens` with a sliding window of two.
    ///
    /// Sequences shorter than 2 yield empty stats.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(tokens)))]
    pub fn from_tokens(tokens: &[T]) -> Self {
        let mut stats: Vec<PairStat<T>> = Vec::new();
        let mut index: WMHashMap<Pair<T>, usize> =
            hash_map_with_capacity(tokens.len().min(1 << 16));

        for (first_index, w) in tokens.windows(2).enumerate() {
            let pair = (w[0], w[1]);
            match index.get(&pair) {
                Some(&idx) => stats[idx].count += 1,
                None => {
                    index.insert(pair, stats.len());
                    stats.push(PairStat {
                        pair,
                        count: 1,
                        first_index,
                    });
                }
            }
        }

        Self { stats, index }
    }

    /// The number of distinct pairs.
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Returns `true` if no pairs were seen.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// The occurrence count of `pair`; 0 if absent.
    pub fn count(
        &self,
        pair: &Pair<T>,
    ) -> usize {
        self.get(pair).map_or(0, |s| s.count)
    }

    /// Look up the stats for `pair`.
    pub fn get(
        &self,
        pair: &Pair<T>,
    ) -> Option<&PairStat<T>> {
        self.index.get(pair).map(|&idx| &self.stats[idx])
    }

    /// Iterate the stats in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &PairStat<T>> {
        self.stats.iter()
    }

    /// The most frequent pair.
    ///
    /// When several pairs share the max count, the one whose first
    /// occurrence is earliest in the sequence wins.
    pub fn most_frequent(&self) -> Option<&PairStat<T>> {
        self.stats.iter().max_by_key(|s| s.selection_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn byte_tokens(text: &str) -> Vec<u32> {
        text.bytes().map(u32::from).collect()
    }

    #[test]
    fn test_short_sequences() {
        assert!(PairStats::<u32>::from_tokens(&[]).is_empty());
        assert!(PairStats::<u32>::from_tokens(&[7]).is_empty());

        let stats = PairStats::<u32>::from_tokens(&[7, 8]);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats.count(&(7, 8)), 1);
        assert_eq!(stats.count(&(8, 7)), 0);
    }

    #[test]
    fn test_counts_and_order() {
        let stats = PairStats::<u32>::from_tokens(&byte_tokens("aaabdaaabac"));

        assert_eq!(
            stats
                .iter()
                .map(|s| (s.pair, s.count, s.first_index))
                .collect::<Vec<_>>(),
            vec![
                ((97, 97), 4, 0),
                ((97, 98), 2, 2),
                ((98, 100), 1, 3),
                ((100, 97), 1, 4),
                ((98, 97), 1, 8),
                ((97, 99), 1, 9),
            ]
        );

        let best = stats.most_frequent().unwrap();
        assert_eq!(best.pair, (97, 97));
        assert_eq!(best.count, 4);
    }

    #[test]
    fn test_overlapping_runs_are_all_counted() {
        // "aaaa" has three overlapping (a, a) windows.
        let stats = PairStats::<u16>::from_tokens(&[1, 1, 1, 1]);
        assert_eq!(stats.count(&(1, 1)), 3);
    }

    #[test]
    fn test_tie_break_is_earliest_position() {
        // (3, 4) and (1, 2) both occur twice; (3, 4) is seen first.
        let stats = PairStats::<u32>::from_tokens(&[3, 4, 9, 1, 2, 3, 4, 1, 2]);
        assert_eq!(stats.count(&(3, 4)), 2);
        assert_eq!(stats.count(&(1, 2)), 2);
        assert_eq!(stats.most_frequent().unwrap().pair, (3, 4));

        let stats = PairStats::<u32>::from_tokens(&[1, 2, 9, 3, 4, 3, 4, 1, 2]);
        assert_eq!(stats.most_frequent().unwrap().pair, (1, 2));
    }

    #[test]
    fn test_selection_key() {
        let a = PairStat::<u32> {
            pair: (1, 2),
            count: 3,
            first_index: 5,
        };
        let b = PairStat::<u32> {
            pair: (2, 1),
            count: 3,
            first_index: 1,
        };
        let c = PairStat::<u32> {
            pair: (2, 2),
            count: 4,
            first_index: 9,
        };

        assert!(b.selection_key() > a.selection_key());
        assert!(c.selection_key() > b.selection_key());
    }
}
