//! WhoisXML API family
//!
//! Every product lives on its own host and takes the key as `apiKey`:
//! - IP geolocation: `ip-geolocation.whoisxmlapi.com/api/v1?ipAddress=`
//! - reverse IP: `reverse-ip.whoisxmlapi.com/api/v1?ip=`
//! - Whois: `www.whoisxmlapi.com/whoisserver/WhoisService?domainName=`
//! - DNS: `www.whoisxmlapi.com/whoisserver/DNSService?domainName=&type=_all`
//! - Whois history: `whois-history.whoisxmlapi.com/api/v1?domainName=&mode=purchase`
//! - subdomains: `POST domains-subdomains-discovery.whoisxmlapi.com/api/v1`
//! - reverse Whois: `POST reverse-whois.whoisxmlapi.com/api/v2`
//! - e-mail verification: `emailverification.whoisxmlapi.com/api/v2?emailAddress=`

use fox_core::{Query, QueryType, Service, Vendor};
use fox_net::VendorRequest;
use serde_json::json;

use crate::traits::require_key;
use crate::{VendorAdapter, VendorError};

const GEOLOCATION_API: &str = "https://ip-geolocation.whoisxmlapi.com/api/v1";
const REVERSE_IP_API: &str = "https://reverse-ip.whoisxmlapi.com/api/v1";
const WHOIS_API: &str = "https://www.whoisxmlapi.com/whoisserver/WhoisService";
const DNS_API: &str = "https://www.whoisxmlapi.com/whoisserver/DNSService";
const WHOIS_HISTORY_API: &str = "https://whois-history.whoisxmlapi.com/api/v1";
const SUBDOMAINS_API: &str = "https://domains-subdomains-discovery.whoisxmlapi.com/api/v1";
const REVERSE_WHOIS_API: &str = "https://reverse-whois.whoisxmlapi.com/api/v2";
const EMAIL_VERIFICATION_API: &str = "https://emailverification.whoisxmlapi.com/api/v2";

pub struct WhoisXmlAdapter {
    api_key: Option<String>,
}

impl WhoisXmlAdapter {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }
}

impl VendorAdapter for WhoisXmlAdapter {
    fn vendor(&self) -> Vendor {
        Vendor::WhoisXml
    }

    fn build_request(&self, service: Service, query: &Query) -> Result<VendorRequest, VendorError> {
        let key = require_key(self.vendor(), &self.api_key)?;
        let value = query.value.as_str();

        let request = match (service, query.query_type) {
            (Service::IpGeolocation, QueryType::Ip) => VendorRequest::get(GEOLOCATION_API)
                .param("apiKey", key)
                .param("ipAddress", value),

            (Service::ReverseIp, QueryType::Ip) => VendorRequest::get(REVERSE_IP_API)
                .param("apiKey", key)
                .param("ip", value),

            // E-mail queries look up the mailbox domain
            (Service::Whois, QueryType::Domain | QueryType::Email) => VendorRequest::get(WHOIS_API)
                .param("apiKey", key)
                .param("domainName", query.lookup_domain())
                .param("outputFormat", "JSON"),

            (Service::DnsLookup, QueryType::Domain) => VendorRequest::get(DNS_API)
                .param("apiKey", key)
                .param("domainName", value)
                .param("type", "_all")
                .param("outputFormat", "JSON"),

            (Service::WhoisHistory, QueryType::Domain) => VendorRequest::get(WHOIS_HISTORY_API)
                .param("apiKey", key)
                .param("domainName", value)
                .param("mode", "purchase"),

            (Service::Subdomains, QueryType::Domain) => VendorRequest::post_json(
                SUBDOMAINS_API,
                json!({
                    "apiKey": key,
                    "subdomains": { "include": [value] }
                }),
            ),

            (Service::ReverseWhois, QueryType::Domain | QueryType::Email) => {
                VendorRequest::post_json(
                    REVERSE_WHOIS_API,
                    json!({
                        "apiKey": key,
                        "searchType": "current",
                        "mode": "purchase",
                        "basicSearchTerms": { "include": [value] }
                    }),
                )
            }

            (Service::EmailVerification, QueryType::Email) => {
                VendorRequest::get(EMAIL_VERIFICATION_API)
                    .param("apiKey", key)
                    .param("emailAddress", value)
            }

            _ => return Err(VendorError::unsupported(self.vendor(), service, query)),
        };

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    fn adapter() -> WhoisXmlAdapter {
        WhoisXmlAdapter::new(Some("wx".into()))
    }

    #[test]
    fn test_whois_for_email_targets_mail_domain() {
        let query = Query::new(QueryType::Email, "Pat@Stripe.com").unwrap();
        let request = adapter().build_request(Service::Whois, &query).unwrap();

        assert_eq!(request.url, WHOIS_API);
        assert_eq!(request.param_value("domainName"), Some("stripe.com"));
        assert_eq!(request.param_value("outputFormat"), Some("JSON"));
    }

    #[test]
    fn test_ip_products() {
        let query = Query::new(QueryType::Ip, "1.1.1.1").unwrap();

        let geo = adapter().build_request(Service::IpGeolocation, &query).unwrap();
        assert_eq!(geo.param_value("ipAddress"), Some("1.1.1.1"));
        assert_eq!(geo.param_value("apiKey"), Some("wx"));

        let reverse = adapter().build_request(Service::ReverseIp, &query).unwrap();
        assert_eq!(reverse.param_value("ip"), Some("1.1.1.1"));
    }

    #[test]
    fn test_post_products_carry_key_in_body() {
        let query = Query::new(QueryType::Domain, "example.com").unwrap();

        let subdomains = adapter().build_request(Service::Subdomains, &query).unwrap();
        assert_eq!(subdomains.method, Method::POST);
        assert_eq!(
            subdomains.body,
            Some(json!({"apiKey": "wx", "subdomains": {"include": ["example.com"]}}))
        );

        let reverse = adapter().build_request(Service::ReverseWhois, &query).unwrap();
        let body = reverse.body.unwrap();
        assert_eq!(body["basicSearchTerms"]["include"][0], "example.com");
        assert_eq!(body["searchType"], "current");
    }

    #[test]
    fn test_dns_lookup_rejects_ip() {
        let query = Query::new(QueryType::Ip, "1.1.1.1").unwrap();
        assert!(matches!(
            adapter().build_request(Service::DnsLookup, &query),
            Err(VendorError::Unsupported { .. })
        ));
    }
}
