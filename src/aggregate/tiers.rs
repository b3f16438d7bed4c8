//! Per-tier summary statistics.

use std::collections::BTreeMap;

use super::palette::Palette;
use crate::error::TierError;
use crate::tiering::{mean, validate_ranks, Ranked, TierAssignment, TierEngine};

/// Summary of one tier.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TierAggregate<'a, T> {
    /// 1-based tier number.
    pub tier_number: usize,
    /// Members sorted ascending by rank (stable for ties).
    pub members: Vec<&'a T>,
    pub min_rank: f64,
    pub max_rank: f64,
    pub avg_rank: f64,
    /// Display colour from the palette.
    pub color: String,
}

impl<T> TierAggregate<'_, T> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Aggregates built by this crate are never empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Builds aggregates from pre-computed assignments.
///
/// Returns one aggregate per tier number present, ascending by tier
/// number. Tiers with no members produce nothing. Fails with
/// [`TierError::InvalidRank`] if any assigned entity has a non-finite rank.
pub fn aggregate_assignments<'a, T: Ranked>(
    assignments: &[TierAssignment<'a, T>],
    palette: &Palette,
) -> Result<Vec<TierAggregate<'a, T>>, TierError> {
    validate_ranks(assignments.iter().map(|a| a.entity))?;

    let mut groups: BTreeMap<usize, Vec<&'a T>> = BTreeMap::new();
    for a in assignments {
        groups.entry(a.tier).or_default().push(a.entity);
    }

    Ok(groups
        .into_iter()
        .map(|(tier_number, mut members)| {
            members.sort_by(|a, b| a.rank().total_cmp(&b.rank()));

            let (mut min_rank, mut max_rank) = (f64::INFINITY, f64::NEG_INFINITY);
            for m in &members {
                min_rank = min_rank.min(m.rank());
                max_rank = max_rank.max(m.rank());
            }

            TierAggregate {
                tier_number,
                avg_rank: mean(members.iter().map(|m| m.rank())),
                min_rank,
                max_rank,
                color: palette.color_for(tier_number).to_string(),
                members,
            }
        })
        .collect())
}

impl TierEngine {
    /// Assigns tiers and summarizes each one.
    pub fn build_tier_aggregates<'a, T: Ranked>(
        &self,
        entities: &'a [T],
        palette: &Palette,
    ) -> Result<Vec<TierAggregate<'a, T>>, TierError> {
        let assignments = self.assign_tiers(entities)?;
        aggregate_assignments(&assignments, palette)
    }
}

/// Builds aggregates with the default configuration and palette.
pub fn build_tier_aggregates<T: Ranked>(
    entities: &[T],
) -> Result<Vec<TierAggregate<'_, T>>, TierError> {
    TierEngine::default().build_tier_aggregates(entities, &Palette::default())
}
