//! VirusTotal v3 reports
//!
//! - files: `GET /api/v3/files/{hash}`
//! - domains: `GET /api/v3/domains/{domain}`
//!
//! The key travels in the `x-apikey` header.

use fox_core::{Query, QueryType, Service, Vendor};
use fox_net::VendorRequest;

use crate::traits::{path_segment, require_key};
use crate::{VendorAdapter, VendorError};

pub const VIRUSTOTAL_API: &str = "https://www.virustotal.com/api/v3";

pub struct VirusTotalAdapter {
    api_key: Option<String>,
    base_url: String,
}

impl VirusTotalAdapter {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: VIRUSTOTAL_API.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

impl VendorAdapter for VirusTotalAdapter {
    fn vendor(&self) -> Vendor {
        Vendor::VirusTotal
    }

    fn build_request(&self, service: Service, query: &Query) -> Result<VendorRequest, VendorError> {
        let collection = match (service, query.query_type) {
            (Service::VirusTotalFile, QueryType::Hash) => "files",
            (Service::VirusTotalDomain, QueryType::Domain) => "domains",
            _ => return Err(VendorError::unsupported(self.vendor(), service, query)),
        };
        let key = require_key(self.vendor(), &self.api_key)?;

        Ok(VendorRequest::get(format!(
            "{}/{}/{}",
            self.base_url,
            collection,
            path_segment(&query.value.to_lowercase())
        ))
        .header("x-apikey", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_and_domain_reports() {
        let adapter = VirusTotalAdapter::new(Some("vt".into()));

        let hash = Query::new(QueryType::Hash, "44D88612FEA8A8F36DE82E1278ABB02F").unwrap();
        let request = adapter.build_request(Service::VirusTotalFile, &hash).unwrap();
        assert_eq!(
            request.url,
            "https://www.virustotal.com/api/v3/files/44d88612fea8a8f36de82e1278abb02f"
        );
        assert_eq!(request.header_value("x-apikey"), Some("vt"));

        let domain = Query::new(QueryType::Domain, "example.com").unwrap();
        let request = adapter.build_request(Service::VirusTotalDomain, &domain).unwrap();
        assert!(request.url.ends_with("/domains/example.com"));
    }

    #[test]
    fn test_file_report_needs_a_hash() {
        let adapter = VirusTotalAdapter::new(Some("vt".into()));
        let query = Query::new(QueryType::Domain, "example.com").unwrap();
        assert!(adapter.build_request(Service::VirusTotalFile, &query).is_err());
    }
}
