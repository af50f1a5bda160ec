//! OSINTFox Network Layer
//!
//! Provides the resilient fetch used by every vendor adapter:
//! - HTTP client construction with timeouts
//! - Declarative request descriptors
//! - Bounded retries with optional backoff
//! - JSON and NDJSON response decoding

pub mod client;
pub mod fetch;

pub use client::*;
pub use fetch::*;
