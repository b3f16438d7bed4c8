//! Domain-agnostic rank tiering.
//!
//! Groups a ranked list of entities into a small number of contiguous
//! tiers, starting a new tier wherever the gap between consecutive ranks
//! is statistically large:
//!
//! - **Tiering**: gap analysis, break detection with a configurable tier
//!   cap, and tier assignment that preserves the caller's order.
//! - **Aggregates**: per-tier members, min/max/average rank, and a
//!   display colour from a palette.
//! - **Batch**: tiering many independent lists (optionally in parallel).
//! - **Cache**: a caller-owned TTL cache for computed results.
//!
//! # Architecture
//!
//! The engine is a pure, synchronous computation. It performs no I/O and
//! keeps no state between calls, so it can be shared freely across
//! threads. Ranking sources, rendering, and request handling belong to
//! consumers at higher layers.
//!
//! # Example
//!
//! ```
//! use u_tiers::aggregate::build_tier_aggregates;
//! use u_tiers::tiering::RankedEntity;
//!
//! let ranks = [1.0, 2.0, 3.0, 10.0, 11.0, 12.0];
//! let players: Vec<_> = ranks
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &r)| RankedEntity::new(format!("p{i}"), r))
//!     .collect();
//!
//! let tiers = build_tier_aggregates(&players).unwrap();
//! assert_eq!(tiers.len(), 2);
//! assert_eq!(tiers[1].members.len(), 3);
//! ```

pub mod aggregate;
pub mod batch;
pub mod cache;
pub mod error;
pub mod tiering;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::TierError;
