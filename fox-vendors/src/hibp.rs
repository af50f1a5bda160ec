//! Have I Been Pwned breached-account lookups
//!
//! `GET https://haveibeenpwned.com/api/v3/breachedaccount/{account}?truncateResponse=false`
//! with the key in the `hibp-api-key` header. HIBP answers 404 for accounts
//! with no breaches.

use fox_core::{Query, QueryType, Service, Vendor};
use fox_net::{FetchError, VendorRequest};
use reqwest::StatusCode;
use serde_json::Value;

use crate::traits::{path_segment, require_key};
use crate::{VendorAdapter, VendorError};

pub const HIBP_API: &str = "https://haveibeenpwned.com/api/v3";

pub struct HibpAdapter {
    api_key: Option<String>,
    base_url: String,
}

impl HibpAdapter {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: HIBP_API.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

impl VendorAdapter for HibpAdapter {
    fn vendor(&self) -> Vendor {
        Vendor::Hibp
    }

    fn build_request(&self, service: Service, query: &Query) -> Result<VendorRequest, VendorError> {
        if service != Service::Hibp || query.query_type != QueryType::Email {
            return Err(VendorError::unsupported(self.vendor(), service, query));
        }
        let key = require_key(self.vendor(), &self.api_key)?;

        Ok(VendorRequest::get(format!(
            "{}/breachedaccount/{}",
            self.base_url,
            path_segment(&query.value)
        ))
        .param("truncateResponse", "false")
        .header("hibp-api-key", key))
    }

    fn recover(&self, _service: Service, error: &FetchError) -> Option<Value> {
        (error.status() == Some(StatusCode::NOT_FOUND)).then(|| Value::Array(Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breached_account_request() {
        let adapter = HibpAdapter::new(Some("hb".into()));
        let query = Query::new(QueryType::Email, "a+b@example.com").unwrap();
        let request = adapter.build_request(Service::Hibp, &query).unwrap();

        assert_eq!(
            request.url,
            "https://haveibeenpwned.com/api/v3/breachedaccount/a%2Bb%40example.com"
        );
        assert_eq!(request.param_value("truncateResponse"), Some("false"));
        assert_eq!(request.header_value("hibp-api-key"), Some("hb"));
    }

    #[test]
    fn test_not_found_means_no_breaches() {
        let adapter = HibpAdapter::new(Some("hb".into()));
        assert_eq!(
            adapter.recover(Service::Hibp, &FetchError::Status(StatusCode::NOT_FOUND)),
            Some(Value::Array(vec![]))
        );
        assert_eq!(
            adapter.recover(Service::Hibp, &FetchError::Status(StatusCode::UNAUTHORIZED)),
            None
        );
    }
}
