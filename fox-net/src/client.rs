//! HTTP client configuration
//!
//! Creates the shared client used for vendor API calls.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Fetch configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Attempts per call, including the first one
    pub max_attempts: u32,
    /// Base delay between attempts in milliseconds (0 = retry immediately)
    pub retry_delay_ms: u64,
    /// User agent sent to vendors
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_attempts: 3,
            retry_delay_ms: 0,
            user_agent: format!("osintfox/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors from vendor HTTP calls
///
/// Rendered messages never contain request URLs, since vendor URLs carry
/// API keys in their query strings.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("HTTP error! status: {}", .0.as_u16())]
    Status(StatusCode),

    #[error("Malformed response: {0}")]
    Decode(String),
}

impl FetchError {
    pub(crate) fn from_reqwest(error: reqwest::Error, timeout_secs: u64) -> Self {
        if error.is_timeout() {
            FetchError::Timeout(timeout_secs)
        } else if error.is_decode() {
            FetchError::Decode(error.without_url().to_string())
        } else {
            FetchError::Request(error.without_url().to_string())
        }
    }

    /// Whether another attempt could produce a different answer.
    ///
    /// Client errors are definitive, except for timeouts and rate limiting.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Status(status) => {
                !status.is_client_error()
                    || *status == StatusCode::REQUEST_TIMEOUT
                    || *status == StatusCode::TOO_MANY_REQUESTS
            }
            FetchError::ClientBuild(_) => false,
            FetchError::Request(_) | FetchError::Timeout(_) | FetchError::Decode(_) => true,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status(status) => Some(*status),
            _ => None,
        }
    }
}

/// Create the HTTP client shared by all vendor calls
pub fn create_client(config: &FetchConfig) -> Result<Client, FetchError> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| FetchError::ClientBuild(e.to_string()))
}
