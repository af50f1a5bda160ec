//! Resilient fetch
//!
//! Executes a [`VendorRequest`] with a bounded number of attempts and
//! surfaces the last error once they are exhausted.

use rand::Rng;
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::{FetchConfig, FetchError};

/// How a vendor encodes its response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Json,
    /// One JSON document per line, collected into an array
    NdJson,
}

/// A single vendor HTTP call, fully described
#[derive(Debug, Clone)]
pub struct VendorRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Value>,
    pub format: ResponseFormat,
    /// Overrides the client timeout for this call
    pub timeout: Option<Duration>,
    /// Whether a timed-out attempt is repeated
    pub retry_on_timeout: bool,
}

impl VendorRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            format: ResponseFormat::Json,
            timeout: None,
            retry_on_timeout: true,
        }
    }

    pub fn post_json(url: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::POST,
            body: Some(body),
            ..Self::get(url)
        }
    }

    pub fn param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn ndjson(mut self) -> Self {
        self.format = ResponseFormat::NdJson;
        self
    }

    /// Endpoints that search server-side for a bounded time need a longer
    /// client timeout, and a repeat would start the whole search again.
    pub fn long_running(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self.retry_on_timeout = false;
        self
    }

    fn should_retry(&self, error: &FetchError) -> bool {
        match error {
            FetchError::Timeout(_) => self.retry_on_timeout,
            other => other.is_retryable(),
        }
    }

    /// Query parameter value, for inspection
    pub fn param_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Header value, for inspection
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Decode a newline-delimited JSON body into an array
pub fn parse_ndjson(text: &str) -> Result<Value, FetchError> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| serde_json::from_str(line).map_err(|e| FetchError::Decode(e.to_string())))
        .collect::<Result<Vec<Value>, _>>()
        .map(Value::Array)
}

fn decode(text: &str, format: ResponseFormat) -> Result<Value, FetchError> {
    match format {
        ResponseFormat::Json => {
            serde_json::from_str(text).map_err(|e| FetchError::Decode(e.to_string()))
        }
        ResponseFormat::NdJson => parse_ndjson(text),
    }
}

/// Delay before the attempt following `attempt`
fn backoff(config: &FetchConfig, attempt: u32) -> Duration {
    if config.retry_delay_ms == 0 {
        return Duration::ZERO;
    }
    let base = config.retry_delay_ms.saturating_mul(u64::from(attempt));
    let jitter = rand::thread_rng().gen_range(0..=config.retry_delay_ms / 2);
    Duration::from_millis(base.saturating_add(jitter))
}

async fn send_once(
    client: &Client,
    request: &VendorRequest,
    config: &FetchConfig,
) -> Result<Value, FetchError> {
    let timeout_secs = request
        .timeout
        .map_or(config.timeout_secs, |timeout| timeout.as_secs());
    let mut builder = client
        .request(request.method.clone(), &request.url)
        .query(&request.query);
    if let Some(timeout) = request.timeout {
        builder = builder.timeout(timeout);
    }
    for (name, value) in &request.headers {
        builder = builder.header(*name, value);
    }
    if let Some(body) = &request.body {
        builder = builder.json(body);
    }

    let response = builder
        .send()
        .await
        .map_err(|e| FetchError::from_reqwest(e, timeout_secs))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let text = response
        .text()
        .await
        .map_err(|e| FetchError::from_reqwest(e, timeout_secs))?;
    decode(&text, request.format)
}

/// Execute a vendor request with bounded retries
pub async fn fetch(
    client: &Client,
    request: &VendorRequest,
    config: &FetchConfig,
) -> Result<Value, FetchError> {
    let attempts = config.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match send_once(client, request, config).await {
            Ok(value) => {
                debug!("{} {} succeeded on attempt {}", request.method, request.url, attempt);
                return Ok(value);
            }
            Err(e) if attempt < attempts && request.should_retry(&e) => {
                warn!("Retrying request ({}/{}): {}", attempt, attempts, e);
                let delay = backoff(config, attempt);
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                attempt += 1;
            }
            Err(e) => {
                error!("Request failed after {} attempt(s): {}", attempt, e);
                return Err(e);
            }
        }
    }
}
