//! Expiring item cache on top of a [`KeyValueStore`].
//!
//! A single entry `{timestamp, items}` lives under [`ITEMS_KEY`]. An entry
//! older than [`CACHE_TTL_MS`] is treated as absent and deleted on read, as
//! is an entry that no longer parses. The time of the last successful fetch
//! is kept separately under [`LAST_UPDATE_KEY`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::item::ItemMap;
use crate::error::Result;
use crate::port::outbound::clock::Clock;
use crate::port::outbound::store::KeyValueStore;

/// Store key of the cached entry.
pub const ITEMS_KEY: &str = "itemsData";

/// Store key of the last successful fetch time (epoch millis).
pub const LAST_UPDATE_KEY: &str = "lastUpdate";

/// Entries older than this are expired: 24 hours.
pub const CACHE_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// The persisted cache entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// When the entry was written (epoch millis).
    pub timestamp: i64,
    pub items: ItemMap,
}

impl CacheEntry {
    /// Milliseconds since the entry was written; negative when the stored
    /// timestamp lies in the future.
    #[must_use]
    pub const fn age_ms(&self, now: i64) -> i64 {
        now.saturating_sub(self.timestamp)
    }

    /// Older than the TTL, or stamped in the future. A future timestamp
    /// can only come from a corrupted file or a clock jump, so it is not
    /// trusted.
    #[must_use]
    pub const fn is_expired(&self, now: i64) -> bool {
        let age = self.age_ms(now);
        age < 0 || age > CACHE_TTL_MS
    }

    /// Milliseconds until expiry; negative once expired.
    #[must_use]
    pub const fn expires_in_ms(&self, now: i64) -> i64 {
        self.timestamp
            .saturating_add(CACHE_TTL_MS)
            .saturating_sub(now)
    }
}

/// Non-destructive view of the cache, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CacheStatus {
    Empty,
    Unreadable,
    Present {
        timestamp: i64,
        age_ms: i64,
        /// Negative once expired.
        expires_in_ms: i64,
        items: usize,
        fresh: bool,
    },
}

pub struct ItemCache {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl ItemCache {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Load cached items if a fresh entry exists.
    ///
    /// Expired and unparseable entries are deleted. Store failures are
    /// logged and reported as a miss.
    pub fn read(&self) -> Option<ItemMap> {
        let raw = match self.store.get(ITEMS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "Failed to read item cache");
                return None;
            }
        };

        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "Discarding unparseable item cache");
                self.discard();
                return None;
            }
        };

        let now = self.clock.now_millis();
        if entry.is_expired(now) {
            debug!(age_ms = entry.age_ms(now), "Discarding expired item cache");
            self.discard();
            return None;
        }

        debug!(items = entry.items.len(), "Item cache hit");
        Some(entry.items)
    }

    /// Replace the cache with `items`, stamped with the current time.
    pub fn write(&self, items: &ItemMap) -> Result<()> {
        let entry = CacheEntry {
            timestamp: self.clock.now_millis(),
            items: items.clone(),
        };
        let json = serde_json::to_string(&entry)?;
        self.store.set(ITEMS_KEY, &json)?;
        debug!(items = items.len(), "Item cache written");
        Ok(())
    }

    /// Delete the entry and the last-update marker.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(ITEMS_KEY)?;
        self.store.remove(LAST_UPDATE_KEY)
    }

    /// Describe the cache without modifying it.
    pub fn status(&self) -> Result<CacheStatus> {
        let Some(raw) = self.store.get(ITEMS_KEY)? else {
            return Ok(CacheStatus::Empty);
        };
        let Ok(entry) = serde_json::from_str::<CacheEntry>(&raw) else {
            return Ok(CacheStatus::Unreadable);
        };

        let now = self.clock.now_millis();
        Ok(CacheStatus::Present {
            timestamp: entry.timestamp,
            age_ms: entry.age_ms(now),
            expires_in_ms: entry.expires_in_ms(now),
            items: entry.items.len(),
            fresh: !entry.is_expired(now),
        })
    }

    /// Epoch millis of the last successful fetch, if recorded.
    #[must_use]
    pub fn last_update(&self) -> Option<i64> {
        match self.store.get(LAST_UPDATE_KEY) {
            Ok(value) => value.and_then(|v| v.trim().parse().ok()),
            Err(e) => {
                warn!(error = %e, "Failed to read last update time");
                None
            }
        }
    }

    /// Record a successful fetch at `timestamp`.
    pub fn record_update(&self, timestamp: i64) -> Result<()> {
        self.store.set(LAST_UPDATE_KEY, &timestamp.to_string())
    }

    /// Current time according to the cache's clock.
    #[must_use]
    pub fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }

    fn discard(&self) {
        if let Err(e) = self.store.remove(ITEMS_KEY) {
            warn!(error = %e, "Failed to delete item cache");
        }
    }
}
