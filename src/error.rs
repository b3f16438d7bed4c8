//! Error types for tier computation.

use thiserror::Error;

/// Errors produced by the tiering engine.
///
/// Empty input and all-equal ranks are not errors: they yield an empty
/// result and a single tier respectively.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TierError {
    /// An entity carries a NaN or infinite rank.
    #[error("entity '{id}' has a non-finite rank ({rank})")]
    InvalidRank { id: String, rank: f64 },

    /// A configuration or palette value was rejected.
    #[error("invalid tier configuration: {0}")]
    InvalidConfig(String),

    /// Input or output could not be converted at a serialization boundary.
    #[error("conversion failed: {0}")]
    Conversion(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rank_names_entity() {
        let err = TierError::InvalidRank {
            id: "wr-12".into(),
            rank: f64::NAN,
        };
        let msg = err.to_string();
        assert!(msg.contains("wr-12"), "message should name the id: {msg}");
        assert!(msg.contains("NaN"));
    }

    #[test]
    fn test_invalid_config_message() {
        let err = TierError::InvalidConfig("max_tiers must be at least 1".into());
        assert_eq!(
            err.to_string(),
            "invalid tier configuration: max_tiers must be at least 1"
        );
    }
}
