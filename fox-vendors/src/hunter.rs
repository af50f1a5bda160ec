//! Hunter.io
//!
//! - domain search: `GET /v2/domain-search?domain=...`
//! - e-mail verifier: `GET /v2/email-verifier?email=...`
//! - combined enrichment: `GET /v2/combined/find?email=...`
//!
//! All endpoints take the key as `api_key`.

use fox_core::{Query, QueryType, Service, Vendor};
use fox_net::VendorRequest;

use crate::traits::require_key;
use crate::{VendorAdapter, VendorError};

pub const HUNTER_API: &str = "https://api.hunter.io/v2";

pub struct HunterAdapter {
    api_key: Option<String>,
    base_url: String,
}

impl HunterAdapter {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: HUNTER_API.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

impl VendorAdapter for HunterAdapter {
    fn vendor(&self) -> Vendor {
        Vendor::Hunter
    }

    fn build_request(&self, service: Service, query: &Query) -> Result<VendorRequest, VendorError> {
        let (endpoint, param) = match (service, query.query_type) {
            (Service::HunterDomainSearch, QueryType::Domain) => ("domain-search", "domain"),
            (Service::HunterEmailVerifier, QueryType::Email) => ("email-verifier", "email"),
            (Service::HunterEnrichment, QueryType::Email) => ("combined/find", "email"),
            _ => return Err(VendorError::unsupported(self.vendor(), service, query)),
        };
        let key = require_key(self.vendor(), &self.api_key)?;

        Ok(
            VendorRequest::get(format!("{}/{}", self.base_url, endpoint))
                .param(param, query.value.as_str())
                .param("api_key", key),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter() -> HunterAdapter {
        HunterAdapter::new(Some("hk".into()))
    }

    #[test]
    fn test_domain_search() {
        let query = Query::new(QueryType::Domain, "stripe.com").unwrap();
        let request = adapter()
            .build_request(Service::HunterDomainSearch, &query)
            .unwrap();
        assert_eq!(request.url, "https://api.hunter.io/v2/domain-search");
        assert_eq!(request.param_value("domain"), Some("stripe.com"));
        assert_eq!(request.param_value("api_key"), Some("hk"));
    }

    #[test]
    fn test_email_endpoints() {
        let query = Query::new(QueryType::Email, "pat@stripe.com").unwrap();

        let verifier = adapter()
            .build_request(Service::HunterEmailVerifier, &query)
            .unwrap();
        assert!(verifier.url.ends_with("/email-verifier"));
        assert_eq!(verifier.param_value("email"), Some("pat@stripe.com"));

        let enrichment = adapter()
            .build_request(Service::HunterEnrichment, &query)
            .unwrap();
        assert!(enrichment.url.ends_with("/combined/find"));
    }

    #[test]
    fn test_missing_key() {
        let query = Query::new(QueryType::Domain, "stripe.com").unwrap();
        let err = HunterAdapter::new(None)
            .build_request(Service::HunterDomainSearch, &query)
            .unwrap_err();
        assert!(matches!(err, VendorError::MissingCredential { vendor: Vendor::Hunter }));
    }
}
