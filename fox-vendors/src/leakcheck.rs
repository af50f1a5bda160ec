//! Leakcheck breach search
//!
//! `GET https://leakcheck.io/api/v2/query/{value}?type=...&limit=100&offset=0`
//! with the key in the `X-API-Key` header.

use fox_core::{Query, QueryType, Service, Vendor};
use fox_net::VendorRequest;

use crate::traits::{path_segment, require_key};
use crate::{VendorAdapter, VendorError};

pub const LEAKCHECK_API: &str = "https://leakcheck.io/api/v2";

/// Records requested per lookup
const PAGE_LIMIT: u32 = 100;

pub struct LeakcheckAdapter {
    api_key: Option<String>,
    base_url: String,
}

impl LeakcheckAdapter {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: LEAKCHECK_API.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

impl VendorAdapter for LeakcheckAdapter {
    fn vendor(&self) -> Vendor {
        Vendor::Leakcheck
    }

    fn build_request(&self, service: Service, query: &Query) -> Result<VendorRequest, VendorError> {
        if service != Service::Leakcheck || query.query_type == QueryType::Ip {
            return Err(VendorError::unsupported(self.vendor(), service, query));
        }
        let key = require_key(self.vendor(), &self.api_key)?;

        Ok(VendorRequest::get(format!(
            "{}/query/{}",
            self.base_url,
            path_segment(&query.value)
        ))
        .param("type", query.query_type.as_str())
        .param("limit", PAGE_LIMIT.to_string())
        .param("offset", "0")
        .header("Accept", "application/json")
        .header("X-API-Key", key))
    }
}
