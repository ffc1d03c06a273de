//! Pluggable response cache.
//!
//! The client never owns a cache; callers hand one in through
//! [`EnkaClientBuilder::cache`](crate::EnkaClientBuilder::cache). Values are stored type-erased
//! and downcast on read, so one cache can hold every resource family.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

/// A type-erased cached payload.
pub type CacheValue = Arc<dyn Any + Send + Sync>;

/// Key/value storage with per-entry expiration.
///
/// Implementations must be safe to share between tasks and are responsible for their own
/// locking. An entry read after its expiration must be reported as absent.
pub trait Cache: Send + Sync {
    /// Returns the value stored under `key`, or `None` when missing or expired.
    fn get(&self, key: &str) -> Option<CacheValue>;

    /// Stores `value` under `key` for `expiration`.
    fn set(&self, key: &str, value: CacheValue, expiration: Duration);
}

impl<C: Cache + ?Sized> Cache for Arc<C> {
    fn get(&self, key: &str) -> Option<CacheValue> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: CacheValue, expiration: Duration) {
        (**self).set(key, value, expiration);
    }
}

/// Defines the behavior of the cache for an API call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CacheMode {
    /// Read from the cache if a non-expired entry is present; otherwise, fetch from the network
    /// and write the response to the cache. (Default)
    #[default]
    Use,
    /// Always fetch from the network, bypassing any cached entry, and write the new response
    /// to the cache.
    Refresh,
    /// Always fetch from the network and do not read from or write to the cache.
    Bypass,
}

impl CacheMode {
    pub(crate) fn reads(self) -> bool {
        self == Self::Use
    }

    pub(crate) fn writes(self) -> bool {
        self != Self::Bypass
    }
}

struct CacheEntry {
    value: CacheValue,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Writes between two sweeps of expired entries.
const PRUNE_EVERY: usize = 64;

/// Expiration used when `now + expiration` does not fit in an `Instant` (about a century).
const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// In-memory [`Cache`] backed by a `HashMap` behind an `RwLock`.
///
/// Expired entries are hidden from [`get`](Cache::get) immediately and physically removed
/// every few writes or by [`purge_expired`](MemoryCache::purge_expired).
#[derive(Default)]
pub struct MemoryCache {
    map: RwLock<HashMap<String, CacheEntry>>,
    writes: AtomicUsize,
}

impl MemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired ones included until purged.
    pub fn len(&self) -> usize {
        self.map.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every expired entry.
    pub fn purge_expired(&self) {
        let now = Instant::now();
        self.map
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|_, entry| entry.is_live(now));
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.map.write().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl Cache for MemoryCache {
    fn get(&self, key: &str) -> Option<CacheValue> {
        let guard = self.map.read().unwrap_or_else(PoisonError::into_inner);
        guard
            .get(key)
            .filter(|entry| entry.is_live(Instant::now()))
            .map(|entry| Arc::clone(&entry.value))
    }

    fn set(&self, key: &str, value: CacheValue, expiration: Duration) {
        let now = Instant::now();
        let Some(expires_at) = now
            .checked_add(expiration)
            .or_else(|| now.checked_add(FAR_FUTURE))
        else {
            return;
        };
        let entry = CacheEntry { value, expires_at };

        let mut guard = self.map.write().unwrap_or_else(PoisonError::into_inner);
        if self.writes.fetch_add(1, Ordering::Relaxed) % PRUNE_EVERY == PRUNE_EVERY - 1 {
            guard.retain(|_, e| e.is_live(now));
        }
        guard.insert(key.to_owned(), entry);
    }
}

impl fmt::Debug for MemoryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryCache")
            .field("entries", &self.len())
            .finish()
    }
}
