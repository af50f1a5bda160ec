//! Gateway bootstrap

use anyhow::Context;
use fox_core::Vendor;
use fox_vendors::HttpGateway;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::{
    build_router, Aggregator, AggregatorSettings, AppState, CacheConfig, GatewayConfig,
    MemoryCache, NoopCache, SharedCache,
};

/// The configured cache, plus the concrete store when it needs purging
pub fn build_cache(config: &CacheConfig) -> (SharedCache, Option<Arc<MemoryCache>>) {
    if config.enabled {
        let memory = Arc::new(MemoryCache::new());
        let shared: SharedCache = memory.clone();
        (shared, Some(memory))
    } else {
        let shared: SharedCache = Arc::new(NoopCache);
        (shared, None)
    }
}

/// Aggregator over the production HTTP gateway
pub fn build_aggregator(config: &GatewayConfig, cache: SharedCache) -> anyhow::Result<Aggregator> {
    let gateway = HttpGateway::new(config.fetch.clone(), &config.credentials)
        .context("Failed to create vendor gateway")?;

    Ok(Aggregator::new(
        Arc::new(gateway),
        cache,
        AggregatorSettings::from_config(config),
    ))
}

/// Serve the gateway until Ctrl-C
pub async fn serve(config: GatewayConfig) -> anyhow::Result<()> {
    let addr = config.server.socket_addr()?;

    let configured = config.credentials.configured();
    if configured.is_empty() {
        warn!("No vendor credentials configured; every service will report an error");
    } else {
        info!(
            "{} of {} vendor credentials configured",
            configured.len(),
            Vendor::ALL.len()
        );
    }

    let (cache, memory) = build_cache(&config.cache);
    let purge_task = match (memory, config.cache.purge_interval_secs) {
        (Some(memory), secs) if secs > 0 => {
            Some(memory.spawn_purge_task(Duration::from_secs(secs)))
        }
        _ => None,
    };

    let aggregator = build_aggregator(&config, cache)?;
    let app = build_router(AppState::new(aggregator, config.server.expose_error_details));

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("OSINTFox gateway listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    if let Some(task) = purge_task {
        task.abort();
    }
    info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
