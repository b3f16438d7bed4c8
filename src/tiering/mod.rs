//! Gap-based tier assignment.
//!
//! Partitions a ranked collection into contiguous rank bands ("tiers").
//! A new tier starts wherever the gap between consecutive ranks is
//! large relative to the average gap and larger than an absolute floor,
//! so tier widths follow the data rather than a fixed bucket size.
//!
//! # Design
//!
//! The engine knows nothing about what is being ranked. Callers plug in
//! their own types through the [`Ranked`] trait, or use [`RankedEntity`]
//! with an arbitrary payload.

mod config;
mod engine;
mod types;

pub use config::{BreakSelection, TierConfig};
pub use engine::{assign_tiers, TierEngine};
pub(crate) use engine::{mean, validate_ranks};
pub use types::{GapAnalysis, Ranked, RankedEntity, TierAssignment};
