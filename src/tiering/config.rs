//! Tiering configuration.

use crate::error::TierError;

/// How breaks are chosen when more qualify than the tier cap allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum BreakSelection {
    /// Keep the first qualifying breaks in ascending rank order.
    ///
    /// Later breaks among lower-ranked entities are discarded even when
    /// they are larger.
    #[default]
    ByPosition,

    /// Keep the largest qualifying gaps (ties go to the earlier position).
    ByMagnitude,
}

/// Configuration for [`TierEngine`](super::TierEngine).
///
/// A gap becomes a tier break when it exceeds both
/// `avg_gap * gap_multiplier` and `min_gap`.
///
/// # Examples
///
/// ```
/// use u_tiers::tiering::{BreakSelection, TierConfig};
///
/// let config = TierConfig::default()
///     .with_max_tiers(8)
///     .with_min_gap(1.0)
///     .with_break_selection(BreakSelection::ByMagnitude);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_tiers, 8);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct TierConfig {
    /// Maximum number of tiers. At most `max_tiers - 1` breaks are kept.
    pub max_tiers: usize,

    /// Multiple of the average gap a gap must exceed.
    pub gap_multiplier: f64,

    /// Absolute floor a gap must exceed, in rank units.
    pub min_gap: f64,

    /// Policy for breaks beyond the cap.
    pub break_selection: BreakSelection,

    /// Whether batch tiering runs groups in parallel.
    ///
    /// Only takes effect with the `parallel` feature.
    pub parallel: bool,
}

impl Default for TierConfig {
    fn default() -> Self {
        Self {
            max_tiers: 6,
            gap_multiplier: 1.5,
            min_gap: 2.0,
            break_selection: BreakSelection::ByPosition,
            parallel: true,
        }
    }
}

impl TierConfig {
    /// Sets the maximum number of tiers.
    pub fn with_max_tiers(mut self, n: usize) -> Self {
        self.max_tiers = n;
        self
    }

    /// Sets the average-gap multiplier.
    pub fn with_gap_multiplier(mut self, m: f64) -> Self {
        self.gap_multiplier = m;
        self
    }

    /// Sets the absolute minimum gap.
    pub fn with_min_gap(mut self, g: f64) -> Self {
        self.min_gap = g;
        self
    }

    pub fn with_break_selection(mut self, s: BreakSelection) -> Self {
        self.break_selection = s;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Maximum number of breaks this configuration keeps.
    pub fn max_breaks(&self) -> usize {
        self.max_tiers.saturating_sub(1)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), TierError> {
        if self.max_tiers == 0 {
            return Err(TierError::InvalidConfig(
                "max_tiers must be at least 1".into(),
            ));
        }
        if !self.gap_multiplier.is_finite() || self.gap_multiplier < 0.0 {
            return Err(TierError::InvalidConfig(format!(
                "gap_multiplier must be finite and non-negative, got {}",
                self.gap_multiplier
            )));
        }
        // A negative floor would let zero gaps split ties.
        if !self.min_gap.is_finite() || self.min_gap < 0.0 {
            return Err(TierError::InvalidConfig(format!(
                "min_gap must be finite and non-negative, got {}",
                self.min_gap
            )));
        }
        Ok(())
    }
}
