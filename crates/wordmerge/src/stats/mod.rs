//! # Pair Statistics
//!
//! Adjacent-pair counting and the pair-merge rewrite shared by
//! [`crate::training`] and [`crate::encoders`].

mod pair_merge;
mod pair_stats;

#[doc(inline)]
pub use pair_merge::merge_pair;
#[doc(inline)]
pub use pair_stats::{PairStat, PairStats};
