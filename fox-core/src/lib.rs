//! OSINTFox Core - Query model and result shaping for OSINT aggregation
//!
//! This crate provides the pure, I/O-free pieces of the gateway:
//! - Query parsing, validation and cache key derivation
//! - The service catalog mapping query types to vendor endpoints
//! - The unified result envelope and per-vendor response normalizers
//! - Advisory recommendations derived from merged results

pub mod query;
pub mod catalog;
pub mod result;
pub mod normalize;
pub mod recommend;

pub use query::*;
pub use catalog::*;
pub use result::*;
pub use recommend::*;

/// Prefix of every cache key
pub const CACHE_KEY_PREFIX: &str = "osint";

/// Default time-to-live of cached results in seconds
pub const DEFAULT_CACHE_TTL_SECS: u64 = 600;
