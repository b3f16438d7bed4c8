//! Per-tier aggregates for display.
//!
//! Groups tier assignments, orders members by rank, and attaches
//! min/max/average rank plus a palette colour to each tier.

mod palette;
mod tiers;

pub use palette::Palette;
pub use tiers::{aggregate_assignments, build_tier_aggregates, TierAggregate};
