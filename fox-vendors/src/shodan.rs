//! Shodan host lookups
//!
//! `GET https://api.shodan.io/shodan/host/{ip}?key=...&minify=true`

use fox_core::{Query, QueryType, Service, Vendor};
use fox_net::VendorRequest;

use crate::traits::{path_segment, require_key};
use crate::{VendorAdapter, VendorError};

pub const SHODAN_API: &str = "https://api.shodan.io";

pub struct ShodanAdapter {
    api_key: Option<String>,
    base_url: String,
}

impl ShodanAdapter {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: SHODAN_API.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

impl VendorAdapter for ShodanAdapter {
    fn vendor(&self) -> Vendor {
        Vendor::Shodan
    }

    fn build_request(&self, service: Service, query: &Query) -> Result<VendorRequest, VendorError> {
        if service != Service::ShodanHost || query.query_type != QueryType::Ip {
            return Err(VendorError::unsupported(self.vendor(), service, query));
        }
        let key = require_key(self.vendor(), &self.api_key)?;

        Ok(VendorRequest::get(format!(
            "{}/shodan/host/{}",
            self.base_url,
            path_segment(&query.value)
        ))
        .param("key", key)
        .param("minify", "true"))
    }
}
