//! In-memory response cache with per-entry TTL.
//!
//! Entries are keyed by the SHA-256 digest of a request key string such as
//! `"search:hydro:symbol,name:20:en"`, and hold the serialized JSON body.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

/// TTL for element list pages.
pub const LIST_TTL: Duration = Duration::from_secs(300);
/// TTL for single element lookups.
pub const ELEMENT_TTL: Duration = Duration::from_secs(600);
/// TTL for search results and statistics.
pub const SHORT_TTL: Duration = Duration::from_secs(60);

struct CacheEntry {
    value: Value,
    expires_at: Instant,
}

/// Hit/miss counters and current size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CacheStats {
    /// Stored entries; expired ones stay until the next insert or lookup
    pub size: usize,
    /// Lookups served from the cache
    pub hits: u64,
    /// Lookups that missed or found an expired entry
    pub misses: u64,
    /// `hits / (hits + misses)`, 0 before the first lookup
    pub hit_rate: f64,
}

/// Thread-safe JSON response cache.
#[derive(Default)]
pub struct ResponseCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ResponseCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hex SHA-256 digest of a request key.
    #[must_use]
    pub fn digest(key: &str) -> String {
        format!("{:x}", Sha256::digest(key.as_bytes()))
    }

    /// Returns the cached value for `key` if present and not expired.
    pub fn get(&self, key: &str) -> Option<Value> {
        let digest = Self::digest(key);
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        match entries.get(&digest) {
            Some(entry) if entry.expires_at > Instant::now() => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry.value.clone())
            }
            Some(_) => {
                entries.remove(&digest);
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Stores `value` under `key` for `ttl`.
    ///
    /// Expired entries are evicted first, so the map only holds live ones.
    pub fn insert(&self, key: &str, value: Value, ttl: Duration) {
        let now = Instant::now();
        let entry = CacheEntry {
            value,
            expires_at: now + ttl,
        };
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.retain(|_, e| e.expires_at > now);
        entries.insert(Self::digest(key), entry);
    }

    /// Current counters.
    pub fn stats(&self) -> CacheStats {
        let size = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        #[allow(clippy::cast_precision_loss)]
        let hit_rate = if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        };
        CacheStats {
            size,
            hits,
            misses,
            hit_rate,
        }
    }
}
