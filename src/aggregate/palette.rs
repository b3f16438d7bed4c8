//! Tier display colours.

use crate::error::TierError;

const DEFAULT_COLORS: [&str; 12] = [
    "#ef4444", // red
    "#f97316", // orange
    "#f59e0b", // amber
    "#eab308", // yellow
    "#84cc16", // lime
    "#22c55e", // green
    "#14b8a6", // teal
    "#06b6d4", // cyan
    "#3b82f6", // blue
    "#6366f1", // indigo
    "#a855f7", // purple
    "#ec4899", // pink
];

const DEFAULT_FALLBACK: &str = "#9ca3af";

/// Ordered colour list indexed by `tier - 1`, with a fallback for tiers
/// beyond its end.
///
/// # Examples
///
/// ```
/// use u_tiers::aggregate::Palette;
///
/// let palette = Palette::default();
/// assert_eq!(palette.color_for(1), "#ef4444");
/// assert_eq!(palette.color_for(99), palette.fallback());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    colors: Vec<String>,
    fallback: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }
}

impl Palette {
    /// Creates a custom palette. The colour list may be empty, in which case
    /// every tier gets `fallback`.
    pub fn new<I, S>(colors: I, fallback: impl Into<String>) -> Result<Self, TierError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        let fallback = fallback.into();

        if fallback.trim().is_empty() {
            return Err(TierError::InvalidConfig(
                "palette fallback colour must not be empty".into(),
            ));
        }
        if let Some(pos) = colors.iter().position(|c| c.trim().is_empty()) {
            return Err(TierError::InvalidConfig(format!(
                "palette colour at index {pos} is empty"
            )));
        }

        Ok(Self { colors, fallback })
    }

    /// Colour for a 1-based tier number.
    ///
    /// Tier 0 is not a valid tier and also maps to the fallback.
    pub fn color_for(&self, tier: usize) -> &str {
        tier.checked_sub(1)
            .and_then(|i| self.colors.get(i))
            .map_or(self.fallback.as_str(), String::as_str)
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
