//! Caller-owned TTL cache for computed tier results.
//!
//! The engine itself is stateless. Services that re-tier the same ranking
//! lists on every request can keep a `TierCache` next to their ranking
//! source and store owned results (e.g. tier numbers per list).
//!
//! Entries expire `ttl` after insertion. When the cache is full, expired
//! entries are purged first; if none were expired, the oldest insertion is
//! evicted.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::TierError;

struct Entry<V> {
    value: V,
    inserted_at: Instant,
}

/// Bounded cache with time-based expiry.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tiers::cache::TierCache;
/// use u_tiers::tiering::{RankedEntity, TierEngine};
///
/// let engine = TierEngine::default();
/// let mut cache: TierCache<Vec<usize>> = TierCache::new(Duration::from_secs(600), 16).unwrap();
///
/// let qbs = vec![RankedEntity::new("a", 1.0), RankedEntity::new("b", 9.0)];
/// let tiers = cache
///     .get_or_try_insert_with("QB", || engine.tier_numbers(&qbs))
///     .unwrap();
/// assert_eq!(tiers.len(), 2);
/// ```
pub struct TierCache<V> {
    ttl: Duration,
    capacity: usize,
    entries: HashMap<String, Entry<V>>,
}

impl<V> TierCache<V> {
    /// Creates an empty cache. `capacity` must be at least 1.
    pub fn new(ttl: Duration, capacity: usize) -> Result<Self, TierError> {
        if capacity == 0 {
            return Err(TierError::InvalidConfig(
                "cache capacity must be at least 1".into(),
            ));
        }
        Ok(Self {
            ttl,
            capacity,
            entries: HashMap::with_capacity(capacity),
        })
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored entries, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the live value for `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.get_at(key, Instant::now())
    }

    /// [`get`](Self::get) evaluated at `now`.
    pub fn get_at(&self, key: &str, now: Instant) -> Option<&V> {
        self.entries
            .get(key)
            .filter(|e| !self.is_expired(e, now))
            .map(|e| &e.value)
    }

    /// Stores `value`, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        self.insert_at(key, value, Instant::now());
    }

    /// [`insert`](Self::insert) evaluated at `now`.
    pub fn insert_at(&mut self, key: impl Into<String>, value: V, now: Instant) {
        let key = key.into();
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            self.make_room(now);
        }
        self.entries.insert(
            key,
            Entry {
                value,
                inserted_at: now,
            },
        );
    }

    /// Returns the live value for `key`, computing and storing it with
    /// `load` when absent or expired. Errors from `load` are returned and
    /// nothing is stored.
    pub fn get_or_try_insert_with<F, E>(&mut self, key: &str, load: F) -> Result<&V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        self.get_or_try_insert_with_at(key, Instant::now(), load)
    }

    /// [`get_or_try_insert_with`](Self::get_or_try_insert_with) evaluated at `now`.
    pub fn get_or_try_insert_with_at<F, E>(
        &mut self,
        key: &str,
        now: Instant,
        load: F,
    ) -> Result<&V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if self.get_at(key, now).is_none() {
            let value = load()?;
            self.insert_at(key, value, now);
        }
        Ok(&self.entries[key].value)
    }

    /// Removes `key`, returning its value even if expired.
    pub fn invalidate(&mut self, key: &str) -> Option<V> {
        self.entries.remove(key).map(|e| e.value)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Drops expired entries, returning how many were removed.
    pub fn purge_expired(&mut self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    /// [`purge_expired`](Self::purge_expired) evaluated at `now`.
    pub fn purge_expired_at(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries
            .retain(|_, e| now.saturating_duration_since(e.inserted_at) < ttl);
        before - self.entries.len()
    }

    fn is_expired(&self, entry: &Entry<V>, now: Instant) -> bool {
        now.saturating_duration_since(entry.inserted_at) >= self.ttl
    }

    fn make_room(&mut self, now: Instant) {
        let purged = self.purge_expired_at(now);
        if purged > 0 {
            debug!(purged, "tier cache purged expired entries");
            return;
        }

        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, e)| e.inserted_at)
            .map(|(k, _)| k.clone());
        if let Some(key) = oldest {
            self.entries.remove(&key);
            debug!(key = %key, "tier cache evicted oldest entry");
        }
    }
}

impl<V> std::fmt::Debug for TierCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TierCache")
            .field("ttl", &self.ttl)
            .field("capacity", &self.capacity)
            .field("len", &self.entries.len())
            .finish()
    }
}
