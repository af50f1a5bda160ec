//! OSINTFox Vendors - Third-party intelligence providers
//!
//! Each adapter turns a validated query into one vendor HTTP request:
//! - **Shodan**: host exposure (open ports, banners, location)
//! - **WhoisXML**: Whois, DNS, history, subdomains, reverse lookups, e-mail verification
//! - **Hunter**: domain search, e-mail verification, person/company enrichment
//! - **Leakcheck**: breach records
//! - **OSINT Industries**: account discovery across online platforms
//! - **VirusTotal**: file and domain reputation
//! - **Lampyre**: Lighthouse task creation
//! - **HIBP**: breached-account lookups
//!
//! [`HttpGateway`] routes a service call to its adapter and executes it
//! through the resilient fetch layer.

pub mod config;
pub mod gateway;
pub mod hibp;
pub mod hunter;
pub mod lampyre;
pub mod leakcheck;
pub mod osint_industries;
pub mod shodan;
pub mod traits;
pub mod virustotal;
pub mod whoisxml;

pub use config::*;
pub use gateway::*;
pub use hibp::HibpAdapter;
pub use hunter::HunterAdapter;
pub use lampyre::LampyreAdapter;
pub use leakcheck::LeakcheckAdapter;
pub use osint_industries::OsintIndustriesAdapter;
pub use shodan::ShodanAdapter;
pub use traits::*;
pub use virustotal::VirusTotalAdapter;
pub use whoisxml::WhoisXmlAdapter;
