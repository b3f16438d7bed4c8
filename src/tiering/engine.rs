//! Gap-based tier assignment.
//!
//! # Algorithm
//!
//! 1. Reject non-finite ranks
//! 2. Stable-sort input indices ascending by rank
//! 3. Compute consecutive gaps and their mean
//! 4. Mark a gap as a break when it exceeds both `avg_gap * gap_multiplier`
//!    and `min_gap`
//! 5. Keep at most `max_tiers - 1` breaks (see [`BreakSelection`])
//! 6. Walk the sorted order from tier 1, incrementing after each break,
//!    and write tiers back by input position
//!
//! Runs in O(n log n) for the sort and O(n) afterwards. The engine holds
//! no state between calls.

use tracing::{debug, warn};

use super::config::{BreakSelection, TierConfig};
use super::types::{GapAnalysis, Ranked, TierAssignment};
use crate::error::TierError;

/// Stateless tiering engine.
///
/// # Examples
///
/// ```
/// use u_tiers::tiering::{RankedEntity, TierEngine};
///
/// let players: Vec<_> = [1.0, 2.0, 3.0, 10.0, 11.0, 12.0]
///     .iter()
///     .enumerate()
///     .map(|(i, &r)| RankedEntity::new(format!("p{i}"), r))
///     .collect();
///
/// let engine = TierEngine::default();
/// let tiers: Vec<usize> = engine
///     .assign_tiers(&players)
///     .unwrap()
///     .iter()
///     .map(|a| a.tier)
///     .collect();
/// assert_eq!(tiers, vec![1, 1, 1, 2, 2, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TierEngine {
    config: TierConfig,
}

impl TierEngine {
    /// Creates an engine after validating `config`.
    pub fn new(config: TierConfig) -> Result<Self, TierError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &TierConfig {
        &self.config
    }

    /// Runs break detection without materializing assignments.
    pub fn analyze<T: Ranked>(&self, entities: &[T]) -> Result<GapAnalysis, TierError> {
        validate_ranks(entities)?;

        let mut sorted_order: Vec<usize> = (0..entities.len()).collect();
        sorted_order.sort_by(|&a, &b| entities[a].rank().total_cmp(&entities[b].rank()));

        let gaps: Vec<f64> = sorted_order
            .windows(2)
            .map(|w| entities[w[1]].rank() - entities[w[0]].rank())
            .collect();

        let avg_gap = mean(gaps.iter().copied());

        // gap > avg * m && gap > min  <=>  gap > max(avg * m, min)
        let threshold = (avg_gap * self.config.gap_multiplier).max(self.config.min_gap);

        let candidate_breaks: Vec<usize> = gaps
            .iter()
            .enumerate()
            .filter(|&(_, &g)| g > threshold)
            .map(|(i, _)| i)
            .collect();

        let (breaks, dropped_breaks) = select_breaks(
            &candidate_breaks,
            &gaps,
            self.config.max_breaks(),
            self.config.break_selection,
        );

        debug!(
            entities = entities.len(),
            avg_gap,
            threshold,
            candidates = candidate_breaks.len(),
            breaks = breaks.len(),
            "tier gap analysis"
        );
        if !dropped_breaks.is_empty() {
            debug!(
                dropped = ?dropped_breaks,
                max_tiers = self.config.max_tiers,
                "tier cap discarded qualifying breaks"
            );
        }

        Ok(GapAnalysis {
            sorted_order,
            gaps,
            avg_gap,
            threshold,
            candidate_breaks,
            breaks,
            dropped_breaks,
        })
    }

    /// Returns the tier of every entity, in input order.
    pub fn tier_numbers<T: Ranked>(&self, entities: &[T]) -> Result<Vec<usize>, TierError> {
        let analysis = self.analyze(entities)?;
        Ok(tiers_from_analysis(&analysis, entities.len()))
    }

    /// Assigns a tier to every entity.
    ///
    /// The output has one assignment per input entity, in input order.
    /// Tier numbers start at 1 and, read in rank order, increase by exactly
    /// 1 at each kept break.
    pub fn assign_tiers<'a, T: Ranked>(
        &self,
        entities: &'a [T],
    ) -> Result<Vec<TierAssignment<'a, T>>, TierError> {
        let tiers = self.tier_numbers(entities)?;
        Ok(entities
            .iter()
            .zip(tiers)
            .map(|(entity, tier)| TierAssignment { tier, entity })
            .collect())
    }

    /// Like [`assign_tiers`](Self::assign_tiers), but places every entity in
    /// tier 1 when tiering fails.
    ///
    /// Intended for display layers that must render something.
    pub fn assign_tiers_or_single<'a, T: Ranked>(
        &self,
        entities: &'a [T],
    ) -> Vec<TierAssignment<'a, T>> {
        match self.assign_tiers(entities) {
            Ok(assignments) => assignments,
            Err(e) => {
                warn!(error = %e, entities = entities.len(), "tiering failed, using a single tier");
                entities
                    .iter()
                    .map(|entity| TierAssignment { tier: 1, entity })
                    .collect()
            }
        }
    }
}

/// Assigns tiers with the default configuration.
pub fn assign_tiers<T: Ranked>(entities: &[T]) -> Result<Vec<TierAssignment<'_, T>>, TierError> {
    TierEngine::default().assign_tiers(entities)
}

/// Fails on the first entity whose rank is NaN or infinite.
pub(crate) fn validate_ranks<'r, T: Ranked + 'r>(
    entities: impl IntoIterator<Item = &'r T>,
) -> Result<(), TierError> {
    match entities.into_iter().find(|e| !e.rank().is_finite()) {
        Some(bad) => Err(TierError::InvalidRank {
            id: bad.id().to_string(),
            rank: bad.rank(),
        }),
        None => Ok(()),
    }
}

/// Arithmetic mean, or 0 for no values.
///
/// Accumulates a running mean so large finite values do not overflow an
/// intermediate sum.
pub(crate) fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut avg = 0.0;
    for (k, v) in values.into_iter().enumerate() {
        avg += (v - avg) / (k + 1) as f64;
    }
    avg
}

/// Splits candidate breaks into (kept, dropped), both ascending by position.
fn select_breaks(
    candidates: &[usize],
    gaps: &[f64],
    max_breaks: usize,
    selection: BreakSelection,
) -> (Vec<usize>, Vec<usize>) {
    if candidates.len() <= max_breaks {
        return (candidates.to_vec(), Vec::new());
    }

    match selection {
        BreakSelection::ByPosition => (
            candidates[..max_breaks].to_vec(),
            candidates[max_breaks..].to_vec(),
        ),
        BreakSelection::ByMagnitude => {
            let mut by_size = candidates.to_vec();
            by_size.sort_by(|&a, &b| gaps[b].total_cmp(&gaps[a]).then(a.cmp(&b)));
            let mut dropped = by_size.split_off(max_breaks);
            by_size.sort_unstable();
            dropped.sort_unstable();
            (by_size, dropped)
        }
    }
}

fn tiers_from_analysis(analysis: &GapAnalysis, n: usize) -> Vec<usize> {
    let mut tiers = vec![0; n];
    let mut breaks = analysis.breaks.iter().peekable();
    let mut tier = 1;

    for (pos, &idx) in analysis.sorted_order.iter().enumerate() {
        tiers[idx] = tier;
        if breaks.peek() == Some(&&pos) {
            breaks.next();
            tier += 1;
        }
    }

    tiers
}
