//! Core trait and data types for ranked entities.

/// An entity with a stable identifier and a numeric rank.
///
/// Lower ranks indicate higher standing. Ranks may be fractional
/// (e.g. an averaged expert consensus rank). Everything else on the
/// implementing type is opaque to the engine.
///
/// # Examples
///
/// ```
/// use u_tiers::tiering::Ranked;
///
/// struct Player {
///     name: String,
///     ecr: f64,
///     team: &'static str,
/// }
///
/// impl Ranked for Player {
///     fn id(&self) -> &str { &self.name }
///     fn rank(&self) -> f64 { self.ecr }
/// }
/// ```
pub trait Ranked {
    /// Stable unique identifier, used in error messages.
    fn id(&self) -> &str;

    /// Numeric rank (lower is better). Must be finite.
    fn rank(&self) -> f64;
}

impl<T: Ranked + ?Sized> Ranked for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn rank(&self) -> f64 {
        (**self).rank()
    }
}

/// A ready-made ranked entity carrying an arbitrary payload.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedEntity<P = ()> {
    /// Stable unique identifier.
    pub id: String,
    /// Rank (lower is better).
    pub rank: f64,
    /// Caller data passed through untouched.
    pub payload: P,
}

impl RankedEntity<()> {
    /// Creates an entity without payload.
    pub fn new(id: impl Into<String>, rank: f64) -> Self {
        Self {
            id: id.into(),
            rank,
            payload: (),
        }
    }
}

impl<P> RankedEntity<P> {
    /// Creates an entity carrying `payload`.
    pub fn with_payload(id: impl Into<String>, rank: f64, payload: P) -> Self {
        Self {
            id: id.into(),
            rank,
            payload,
        }
    }
}

impl<P> Ranked for RankedEntity<P> {
    fn id(&self) -> &str {
        &self.id
    }

    fn rank(&self) -> f64 {
        self.rank
    }
}

/// The tier assigned to one input entity.
///
/// The entity is borrowed from the caller's slice, never copied.
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TierAssignment<'a, T> {
    /// 1-based tier number.
    pub tier: usize,
    /// The entity this tier belongs to.
    pub entity: &'a T,
}

impl<T> Clone for TierAssignment<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TierAssignment<'_, T> {}

/// Intermediate result of break detection.
///
/// Break positions index into [`gaps`](Self::gaps): break `i` separates
/// `sorted_order[i]` from `sorted_order[i + 1]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GapAnalysis {
    /// Input indices in ascending rank order (stable for ties).
    pub sorted_order: Vec<usize>,
    /// Consecutive rank differences along `sorted_order`.
    pub gaps: Vec<f64>,
    /// Mean of `gaps`, or 0 when there are none.
    pub avg_gap: f64,
    /// A gap must be strictly greater than this to break.
    pub threshold: f64,
    /// Every gap position that qualified, ascending.
    pub candidate_breaks: Vec<usize>,
    /// Breaks actually used, ascending.
    pub breaks: Vec<usize>,
    /// Qualifying breaks discarded by the tier cap, ascending.
    pub dropped_breaks: Vec<usize>,
}

impl GapAnalysis {
    /// Number of tiers this analysis produces (0 for empty input).
    pub fn tier_count(&self) -> usize {
        if self.sorted_order.is_empty() {
            0
        } else {
            self.breaks.len() + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_entity_accessors() {
        let e = RankedEntity::with_payload("qb-1", 1.5, "KC");
        assert_eq!(e.id(), "qb-1");
        assert!((e.rank() - 1.5).abs() < 1e-12);
        assert_eq!(e.payload, "KC");
    }

    #[test]
    fn test_ranked_through_reference() {
        let e = RankedEntity::new("rb-3", 3.0);
        let r = &e;
        assert_eq!(Ranked::id(&r), "rb-3");
        assert!((Ranked::rank(&r) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_tier_count() {
        let empty = GapAnalysis {
            sorted_order: vec![],
            gaps: vec![],
            avg_gap: 0.0,
            threshold: 2.0,
            candidate_breaks: vec![],
            breaks: vec![],
            dropped_breaks: vec![],
        };
        assert_eq!(empty.tier_count(), 0);

        let two = GapAnalysis {
            sorted_order: vec![0, 1, 2],
            gaps: vec![1.0, 9.0],
            avg_gap: 5.0,
            threshold: 7.5,
            candidate_breaks: vec![1],
            breaks: vec![1],
            dropped_breaks: vec![],
        };
        assert_eq!(two.tier_count(), 2);
    }
}
