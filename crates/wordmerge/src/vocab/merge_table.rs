//! # Merge Table ``{ (T, T) -> T }``

use crate::{
    errors::{WMResult, WordmergeError},
    types::{Pair, TokenType, WMHashMap},
};

/// Ordered table of learned merges.
///
/// Entries are kept in the order they were learned; the position of
/// an entry is its *rank*, and lower ranks are applied first when encoding.
#[derive(Debug, Clone, Default)]
pub struct MergeTable<T: TokenType> {
    /// ``[((a, b), t)]`` in rank order.
    merges: Vec<(Pair<T>, T)>,

    /// ``(a, b) -> rank``.
    ranks: WMHashMap<Pair<T>, usize>,
}

impl<T: TokenType> PartialEq for MergeTable<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.merges == other.merges
    }
}

impl<T: TokenType> Eq for MergeTable<T> {}

impl<T: TokenType> MergeTable<T> {
    /// Build a [`MergeTable`] from ``((a, b), t)`` entries in rank order.
    pub fn try_from_merges<I>(merges: I) -> WMResult<Self>
    where
        I: IntoIterator<Item = (Pair<T>, T)>,
    {
        let mut table = Self::default();
        for (pair, token) in merges {
            table.insert(pair, token)?;
        }
        Ok(table)
    }

    /// Append a merge at the next rank.
    ///
    /// A pair can only be merged once.
    pub fn insert(
        &mut self,
        pair: Pair<T>,
        token: T,
    ) -> WMResult<()> {
        if let Some(&rank) = self.ranks.get(&pair) {
            return Err(WordmergeError::VocabConflict(format!(
                "pair {pair:?} -> {token} already merged at rank {rank} -> {}",
                self.merges[rank].1
            )));
        }
        self.ranks.insert(pair, self.merges.len());
        self.merges.push((pair, token));
        Ok(())
    }

    /// The number of merges.
    pub fn len(&self) -> usize {
        self.merges.len()
    }

    /// Returns `true` if there are no merges.
    pub fn is_empty(&self) -> bool {
        self.merges.is_empty()
    }

    /// The merges in rank order.
    pub fn merges(&self) -> &[(Pair<T>, T)] {
        &self.merges
    }

    /// Iterate ``((a, b), t)`` in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &(Pair<T>, T)> {
        self.merges.iter()
    }

    /// The rank of `pair`, if it was merged.
    pub fn rank(
        &self,
        pair: &Pair<T>,
    ) -> Option<usize> {
        self.ranks.get(pair).copied()
    }

    /// Look up the token `pair` merges into.
    pub fn lookup_pair(
        &self,
        pair: &Pair<T>,
    ) -> Option<T> {
        self.rank(pair).map(|rank| self.merges[rank].1)
    }

    /// Look up ``(rank, token)`` for `pair`.
    pub fn lookup_ranked(
        &self,
        pair: &Pair<T>,
    ) -> Option<(usize, T)> {
        self.rank(pair).map(|rank| (rank, self.merges[rank].1))
    }
}
