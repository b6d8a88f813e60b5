// =====================================================================================
// TTL CACHE SERVICE
// =====================================================================================

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[cfg(test)]
use mock_instant::Instant;
#[cfg(not(test))]
use std::time::Instant;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, instrument, warn};

use shared_config::CacheConfig;

use crate::models::CacheStats;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    inserted_at: Instant,
    ttl: Duration,
    size_bytes: usize,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        self.inserted_at.elapsed() >= self.ttl
    }
}

/// Expiring key-value store for JSON payloads.
///
/// Expiry is checked lazily on every read; `spawn_sweeper` additionally evicts
/// expired entries in the background so memory is reclaimed for keys that are
/// never read again. There is no capacity bound.
#[derive(Debug)]
pub struct CacheService {
    entries: RwLock<HashMap<String, CacheEntry>>,
    hits: AtomicU64,
    misses: AtomicU64,
    default_ttl: Duration,
    check_period: Duration,
}

impl CacheService {
    pub fn new(config: &CacheConfig) -> Self {
        Self::with_ttl(
            Duration::from_secs(config.default_ttl_secs),
            Duration::from_secs(config.check_period_secs),
        )
    }

    pub fn with_ttl(default_ttl: Duration, check_period: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            default_ttl,
            check_period,
        }
    }

    /// Typed read. A value stored under `key` that does not deserialize as `T`
    /// is reported as a miss.
    #[instrument(skip(self))]
    pub async fn get<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        let Some(value) = self.lookup(key).await else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            debug!("Cache miss: key={}", key);
            return None;
        };

        match serde_json::from_value(value) {
            Ok(typed) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("Cache hit: key={}", key);
                Some(typed)
            }
            Err(e) => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                warn!("Cached value for key={} has unexpected shape: {}", key, e);
                None
            }
        }
    }

    pub async fn get_value(&self, key: &str) -> Option<Value> {
        self.get::<Value>(key).await
    }

    /// Stores `value` under `key`, overwriting any previous entry.
    ///
    /// `ttl_secs` of `None` or `0` means the default TTL. Returns `false` when
    /// the value cannot be represented as JSON.
    #[instrument(skip(self, value))]
    pub async fn set<T>(&self, key: &str, value: &T, ttl_secs: Option<u64>) -> bool
    where
        T: Serialize + ?Sized,
    {
        let value = match serde_json::to_value(value) {
            Ok(value) => value,
            Err(e) => {
                warn!("Refusing to cache key={}: {}", key, e);
                return false;
            }
        };

        let ttl = self.resolve_ttl(ttl_secs);
        let size_bytes = value.to_string().len();
        let entry = CacheEntry {
            value,
            inserted_at: Instant::now(),
            ttl,
            size_bytes,
        };

        self.entries.write().await.insert(key.to_string(), entry);
        debug!("Cache set: key={}, ttl={}s, size={} bytes", key, ttl.as_secs(), size_bytes);
        true
    }

    /// Removes `key`; returns how many entries were removed (0 or 1).
    pub async fn delete(&self, key: &str) -> usize {
        let removed = self.entries.write().await.remove(key);
        usize::from(removed.is_some())
    }

    /// Drops every entry and resets the hit/miss counters.
    pub async fn flush(&self) {
        self.entries.write().await.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        debug!("Cache flushed");
    }

    pub async fn has(&self, key: &str) -> bool {
        let entries = self.entries.read().await;
        entries.get(key).is_some_and(|entry| !entry.is_expired())
    }

    pub async fn stats(&self) -> CacheStats {
        let entries = self.entries.read().await;

        let mut stats = CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            ..CacheStats::default()
        };

        for (key, entry) in entries.iter().filter(|(_, entry)| !entry.is_expired()) {
            stats.keys += 1;
            stats.ksize += key.len();
            stats.vsize += entry.size_bytes;
        }

        stats
    }

    /// Evicts every expired entry; returns the number removed.
    pub async fn sweep_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        before - entries.len()
    }

    /// Starts the periodic sweep. The task only holds a weak reference and exits
    /// on the first tick after the cache is dropped. A zero check period
    /// disables sweeping and returns `None`.
    pub fn spawn_sweeper(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        if self.check_period.is_zero() {
            warn!("Cache check period is zero, background sweep disabled");
            return None;
        }

        let cache = Arc::downgrade(self);
        let period = self.check_period;

        Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately
            ticker.tick().await;

            loop {
                ticker.tick().await;

                let Some(cache) = cache.upgrade() else {
                    debug!("Cache dropped, stopping sweeper");
                    break;
                };

                let evicted = cache.sweep_expired().await;
                if evicted > 0 {
                    debug!("Cache sweep evicted {} expired entries", evicted);
                }
            }
        }))
    }

    fn resolve_ttl(&self, ttl_secs: Option<u64>) -> Duration {
        match ttl_secs {
            Some(secs) if secs > 0 => Duration::from_secs(secs),
            _ => self.default_ttl,
        }
    }

    async fn lookup(&self, key: &str) -> Option<Value> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                None => return None,
                Some(entry) if !entry.is_expired() => return Some(entry.value.clone()),
                Some(_) => {}
            }
        }

        // Expired but not yet swept
        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(CacheEntry::is_expired) {
            entries.remove(key);
            debug!("Cache entry expired on read: key={}", key);
        }
        None
    }

    #[cfg(test)]
    async fn resident_len(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl Default for CacheService {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}
