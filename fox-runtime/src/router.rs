//! Aggregation router
//!
//! Cache short-circuit, service selection, concurrent dispatch, merge and
//! aggregate cache write for one validated query.

use chrono::Utc;
use fox_core::{
    recommendations, select_services, Category, Query, ServiceResult, ServiceSpec,
    UnifiedResult, DEFAULT_CACHE_TTL_SECS,
};
use fox_vendors::SharedGateway;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{GatewayConfig, SharedCache};

/// Faults that abort an aggregation
#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("Failed to serialize results: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Router behaviour knobs
#[derive(Debug, Clone)]
pub struct AggregatorSettings {
    /// Lifetime of cache entries (`None` = indefinite)
    pub ttl: Option<Duration>,
    /// Consult and fill the per-service cache
    pub per_service_cache: bool,
    pub free_mail_providers: Vec<String>,
}

impl Default for AggregatorSettings {
    fn default() -> Self {
        Self {
            ttl: Some(Duration::from_secs(DEFAULT_CACHE_TTL_SECS)),
            per_service_cache: true,
            free_mail_providers: fox_core::default_free_mail_providers(),
        }
    }
}

impl AggregatorSettings {
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self {
            ttl: config.cache.ttl(),
            per_service_cache: config.cache.enabled && config.cache.per_service,
            free_mail_providers: config.free_mail_providers.clone(),
        }
    }
}

/// What a cache entry holds
///
/// Aggregate and per-service keys share one namespace, so a value may sit
/// under a key derived for the other kind. Reads of the wrong kind miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Aggregate,
    Service,
}

/// Stored form of every cache value: `{"kind": ..., "data": ...}`
#[derive(Debug, Serialize, Deserialize)]
pub struct CachedPayload<T = Value> {
    pub kind: EntryKind,
    pub data: T,
}

impl CachedPayload {
    /// Tag `data` for storage
    pub fn wrap(kind: EntryKind, data: &Value) -> Result<Value, serde_json::Error> {
        serde_json::to_value(CachedPayload::<&Value> { kind, data })
    }

    /// The payload under `stored` when it is of `kind`
    pub fn extract(stored: Value, kind: EntryKind) -> Option<Value> {
        serde_json::from_value::<CachedPayload>(stored)
            .ok()
            .filter(|entry| entry.kind == kind)
            .map(|entry| entry.data)
    }
}

/// Aggregated results and whether they came from the cache
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub results: Value,
    pub cached: bool,
}

/// Fans a query out to its vendor services and merges the answers
pub struct Aggregator {
    gateway: SharedGateway,
    cache: SharedCache,
    settings: AggregatorSettings,
}

impl Aggregator {
    pub fn new(gateway: SharedGateway, cache: SharedCache, settings: AggregatorSettings) -> Self {
        Self {
            gateway,
            cache,
            settings,
        }
    }

    pub fn settings(&self) -> &AggregatorSettings {
        &self.settings
    }

    /// Services that would be consulted for a query
    pub fn plan(&self, query: &Query) -> Vec<&'static ServiceSpec> {
        select_services(query, &self.settings.free_mail_providers)
    }

    pub async fn search(&self, query: &Query) -> Result<SearchOutcome, AggregateError> {
        let key = query.cache_key();
        // keys embed the raw value; logs name the query instead
        let label = query.to_string();

        if let Some(results) = self.cache_get(&key, EntryKind::Aggregate, &label).await {
            info!("Cache hit for {}", label);
            return Ok(SearchOutcome {
                results,
                cached: true,
            });
        }

        let specs = self.plan(query);
        info!("Dispatching {} service(s) for {}", specs.len(), query);

        let outcomes = join_all(specs.iter().map(|spec| self.run_service(spec, query))).await;

        let mut merged = UnifiedResult::new();
        for (spec, outcome) in specs.iter().zip(outcomes) {
            merged.record(spec, outcome);
        }
        let advice = recommendations(query, &merged, Utc::now());
        merged.set(Category::Recommendations, serde_json::to_value(advice)?);

        let failures = merged.error_count();
        if failures > 0 {
            warn!("{} of {} service(s) failed for {}", failures, specs.len(), query);
        }

        let results = serde_json::to_value(&merged)?;
        self.cache_put(&key, EntryKind::Aggregate, &results, &label).await;

        Ok(SearchOutcome {
            results,
            cached: false,
        })
    }

    /// One service call behind its per-service cache entry
    async fn run_service(&self, spec: &ServiceSpec, query: &Query) -> ServiceResult {
        let key = query.service_cache_key(spec.cache_suffix());
        let label = format!("{} [{}]", query, spec.service);

        if self.settings.per_service_cache {
            if let Some(payload) = self.cache_get(&key, EntryKind::Service, &label).await {
                debug!("Service cache hit for {}", label);
                return ServiceResult::Ok(payload);
            }
        }

        match self.gateway.call(spec.service, query).await {
            Ok(payload) => {
                if self.settings.per_service_cache {
                    self.cache_put(&key, EntryKind::Service, &payload, &label).await;
                }
                ServiceResult::Ok(payload)
            }
            Err(e) => {
                warn!("{} failed for {}: {}", spec.service, query, e);
                ServiceResult::Err(e.to_string())
            }
        }
    }

    /// Cache read where a failure or an entry of another kind counts as a miss
    async fn cache_get(&self, key: &str, kind: EntryKind, label: &str) -> Option<Value> {
        match self.cache.get(key).await {
            Ok(stored) => {
                let data = CachedPayload::extract(stored?, kind);
                if data.is_none() {
                    debug!("Ignoring non-{:?} cache entry for {}", kind, label);
                }
                data
            }
            Err(e) => {
                warn!("Cache read failed for {}: {}", label, e);
                None
            }
        }
    }

    /// Cache write where a failure is logged and skipped
    async fn cache_put(&self, key: &str, kind: EntryKind, value: &Value, label: &str) {
        let stored = match CachedPayload::wrap(kind, value) {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Cache write skipped for {}: {}", label, e);
                return;
            }
        };
        if let Err(e) = self.cache.put(key, &stored, self.settings.ttl).await {
            warn!("Cache write failed for {}: {}", label, e);
        } else {
            debug!("Cached {}", label);
        }
    }
}
