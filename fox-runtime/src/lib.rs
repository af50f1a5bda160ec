//! OSINTFox Runtime - Aggregation gateway
//!
//! Ties the pieces together:
//! - [`Aggregator`] fans a query out to every selected vendor service,
//!   merges the normalized results and caches the aggregate
//! - [`CacheStore`] is the TTL cache seam, with an in-memory implementation
//! - [`build_router`] exposes `GET /api/search` over axum
//! - [`GatewayConfig`] loads TOML configuration with environment overrides

pub mod cache;
pub mod config;
pub mod http;
pub mod router;
pub mod server;

pub use cache::*;
pub use config::*;
pub use http::*;
pub use router::*;
pub use server::*;
