//! Tiering many independent rank lists at once.
//!
//! Typical use is one list per position or category. Each group is tiered
//! on its own; a failure in one group leaves the others untouched.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::TierError;
use crate::tiering::{Ranked, TierAssignment, TierEngine};

/// Result for one group of a batch.
pub type GroupResult<'a, T> = Result<Vec<TierAssignment<'a, T>>, TierError>;

impl TierEngine {
    /// Assigns tiers to each group, returning results in group order.
    ///
    /// With the `parallel` feature and [`TierConfig::parallel`] set, groups
    /// are processed on the rayon thread pool.
    ///
    /// [`TierConfig::parallel`]: crate::tiering::TierConfig::parallel
    pub fn assign_tiers_batch<'a, T, G>(&self, groups: &'a [G]) -> Vec<GroupResult<'a, T>>
    where
        T: Ranked + Sync,
        G: AsRef<[T]> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            if self.config().parallel {
                return groups
                    .par_iter()
                    .map(|g| self.assign_tiers(g.as_ref()))
                    .collect();
            }
        }

        groups.iter().map(|g| self.assign_tiers(g.as_ref())).collect()
    }
}
