//! OSINT Industries account discovery
//!
//! `GET https://api.osint.industries/v2/request/stream?type=&query=&timeout=60`
//! with the key in the `api-key` header. The stream endpoint answers with one
//! JSON document per module. The search can run for the full server-side
//! timeout, so the call waits past it and is never repeated on timeout.

use fox_core::{Query, QueryType, Service, Vendor};
use fox_net::VendorRequest;
use std::time::Duration;

use crate::traits::require_key;
use crate::{VendorAdapter, VendorError};

pub const OSINT_INDUSTRIES_API: &str = "https://api.osint.industries/v2";

/// Server-side search timeout in seconds
const SEARCH_TIMEOUT_SECS: u64 = 60;

/// Client-side limit, past the server-side one
const CLIENT_TIMEOUT: Duration = Duration::from_secs(SEARCH_TIMEOUT_SECS + 15);

pub struct OsintIndustriesAdapter {
    api_key: Option<String>,
    base_url: String,
}

impl OsintIndustriesAdapter {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: OSINT_INDUSTRIES_API.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

impl VendorAdapter for OsintIndustriesAdapter {
    fn vendor(&self) -> Vendor {
        Vendor::OsintIndustries
    }

    fn build_request(&self, service: Service, query: &Query) -> Result<VendorRequest, VendorError> {
        let supported = matches!(
            query.query_type,
            QueryType::Email | QueryType::Username | QueryType::Phone
        );
        if service != Service::OsintIndustries || !supported {
            return Err(VendorError::unsupported(self.vendor(), service, query));
        }
        let key = require_key(self.vendor(), &self.api_key)?;

        Ok(
            VendorRequest::get(format!("{}/request/stream", self.base_url))
                .param("type", query.query_type.as_str())
                .param("query", query.value.as_str())
                .param("timeout", SEARCH_TIMEOUT_SECS.to_string())
                .header("accept", "application/json")
                .header("api-key", key)
                .ndjson()
                .long_running(CLIENT_TIMEOUT),
        )
    }
}
