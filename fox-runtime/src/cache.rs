//! Result cache
//!
//! Keys are opaque strings and values arbitrary JSON. Expiry is the store's
//! job: callers never inspect timestamps themselves.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::debug;

/// Cache backend failures
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache backend unavailable: {0}")]
    Unavailable(String),

    #[error("Cache serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Minimal key/value contract the router depends on
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, CacheError>;

    /// Store a value; `None` keeps it indefinitely
    async fn put(&self, key: &str, value: &Value, ttl: Option<Duration>) -> Result<(), CacheError>;
}

pub type SharedCache = Arc<dyn CacheStore>;

/// A stored value and its expiry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub key: String,
    pub value: Value,
    pub expires_at: Option<DateTime<Utc>>,
}

impl CacheEntry {
    pub fn new(key: &str, value: Value, ttl: Option<Duration>) -> Self {
        let now = Utc::now();
        let expires_at = ttl
            .and_then(|ttl| chrono::Duration::from_std(ttl).ok())
            .and_then(|ttl| now.checked_add_signed(ttl));

        Self {
            key: key.to_string(),
            value,
            expires_at,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// Process-local cache over a concurrent map
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: DashMap<String, CacheEntry>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every expired entry, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        before.saturating_sub(self.entries.len())
    }

    /// Periodically purge expired entries until the handle is aborted
    pub fn spawn_purge_task(self: Arc<Self>, every: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = interval(every);
            loop {
                ticker.tick().await;
                let purged = self.purge_expired();
                if purged > 0 {
                    debug!("Purged {} expired cache entries", purged);
                }
            }
        })
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Value>, CacheError> {
        // Clone out so the shard lock is released before any removal
        let entry = match self.entries.get(key) {
            Some(entry) => entry.value().clone(),
            None => return Ok(None),
        };

        let now = Utc::now();
        if entry.is_expired(now) {
            self.entries.remove_if(key, |_, e| e.is_expired(now));
            return Ok(None);
        }
        Ok(Some(entry.value))
    }

    async fn put(&self, key: &str, value: &Value, ttl: Option<Duration>) -> Result<(), CacheError> {
        self.entries
            .insert(key.to_string(), CacheEntry::new(key, value.clone(), ttl));
        Ok(())
    }
}

/// Cache that stores nothing; used when caching is disabled
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCache;

#[async_trait]
impl CacheStore for NoopCache {
    async fn get(&self, _key: &str) -> Result<Option<Value>, CacheError> {
        Ok(None)
    }

    async fn put(&self, _key: &str, _value: &Value, _ttl: Option<Duration>) -> Result<(), CacheError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_put_then_get() {
        let cache = MemoryCache::new();
        cache
            .put("osint:ip:8.8.8.8", &json!({"ipInfo": {}}), Some(Duration::from_secs(600)))
            .await
            .unwrap();

        assert_eq!(
            cache.get("osint:ip:8.8.8.8").await.unwrap(),
            Some(json!({"ipInfo": {}}))
        );
        assert_eq!(cache.get("osint:ip:1.1.1.1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_expired_entries_are_never_returned() {
        let cache = MemoryCache::new();
        cache
            .put("k", &json!(1), Some(Duration::from_millis(10)))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;

        assert_eq!(cache.get("k").await.unwrap(), None);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_no_ttl_keeps_entry() {
        let cache = MemoryCache::new();
        cache.put("k", &json!("v"), None).await.unwrap();
        assert_eq!(cache.purge_expired(), 0);
        assert_eq!(cache.get("k").await.unwrap(), Some(json!("v")));
    }

    #[tokio::test]
    async fn test_purge_expired() {
        let cache = MemoryCache::new();
        cache
            .put("short", &json!(1), Some(Duration::from_millis(5)))
            .await
            .unwrap();
        cache
            .put("long", &json!(2), Some(Duration::from_secs(600)))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(cache.purge_expired(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let cache = Arc::new(MemoryCache::new());
        let writers: Vec<_> = (0..8)
            .map(|i| {
                let cache = cache.clone();
                tokio::spawn(async move { cache.put("k", &json!(i), None).await })
            })
            .collect();
        for writer in writers {
            writer.await.unwrap().unwrap();
        }

        let value = cache.get("k").await.unwrap().unwrap();
        assert!(value.as_i64().is_some_and(|v| (0..8).contains(&v)));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_noop_cache() {
        let cache = NoopCache;
        cache.put("k", &json!(1), None).await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), None);
    }
}
