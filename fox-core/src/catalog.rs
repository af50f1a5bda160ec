//! Service catalog
//!
//! The single source of truth for which vendor endpoints serve which query
//! type. Each entry is a [`ServiceSpec`] naming the endpoint, the result
//! category it fills, the normalizer applied to its payload and the condition
//! under which it applies.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::normalize;
use crate::{Query, QueryType};

/// Third-party intelligence providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Vendor {
    Shodan,
    WhoisXml,
    Hunter,
    Leakcheck,
    OsintIndustries,
    VirusTotal,
    Lampyre,
    Hibp,
}

impl Vendor {
    pub const ALL: [Vendor; 8] = [
        Vendor::Shodan,
        Vendor::WhoisXml,
        Vendor::Hunter,
        Vendor::Leakcheck,
        Vendor::OsintIndustries,
        Vendor::VirusTotal,
        Vendor::Lampyre,
        Vendor::Hibp,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Vendor::Shodan => "shodan",
            Vendor::WhoisXml => "whoisxml",
            Vendor::Hunter => "hunter",
            Vendor::Leakcheck => "leakcheck",
            Vendor::OsintIndustries => "osint_industries",
            Vendor::VirusTotal => "virustotal",
            Vendor::Lampyre => "lampyre",
            Vendor::Hibp => "hibp",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single vendor endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Service {
    ShodanHost,
    IpGeolocation,
    ReverseIp,
    Whois,
    ReverseWhois,
    DnsLookup,
    WhoisHistory,
    Subdomains,
    EmailVerification,
    HunterDomainSearch,
    HunterEmailVerifier,
    HunterEnrichment,
    Leakcheck,
    OsintIndustries,
    VirusTotalFile,
    VirusTotalDomain,
    Lampyre,
    Hibp,
}

impl Service {
    pub fn vendor(&self) -> Vendor {
        match self {
            Service::ShodanHost => Vendor::Shodan,
            Service::IpGeolocation
            | Service::ReverseIp
            | Service::Whois
            | Service::ReverseWhois
            | Service::DnsLookup
            | Service::WhoisHistory
            | Service::Subdomains
            | Service::EmailVerification => Vendor::WhoisXml,
            Service::HunterDomainSearch
            | Service::HunterEmailVerifier
            | Service::HunterEnrichment => Vendor::Hunter,
            Service::Leakcheck => Vendor::Leakcheck,
            Service::OsintIndustries => Vendor::OsintIndustries,
            Service::VirusTotalFile | Service::VirusTotalDomain => Vendor::VirusTotal,
            Service::Lampyre => Vendor::Lampyre,
            Service::Hibp => Vendor::Hibp,
        }
    }

    /// Stable name, also used as the per-service cache key suffix
    pub fn name(&self) -> &'static str {
        match self {
            Service::ShodanHost => "shodan_host",
            Service::IpGeolocation => "ip_geolocation",
            Service::ReverseIp => "reverse_ip",
            Service::Whois => "whois",
            Service::ReverseWhois => "reverse_whois",
            Service::DnsLookup => "dns_lookup",
            Service::WhoisHistory => "whois_history",
            Service::Subdomains => "subdomains",
            Service::EmailVerification => "email_verification",
            Service::HunterDomainSearch => "hunter_domain_search",
            Service::HunterEmailVerifier => "hunter_email_verifier",
            Service::HunterEnrichment => "hunter_enrichment",
            Service::Leakcheck => "leakcheck",
            Service::OsintIndustries => "osint_industries",
            Service::VirusTotalFile => "virustotal_file",
            Service::VirusTotalDomain => "virustotal_domain",
            Service::Lampyre => "lampyre",
            Service::Hibp => "hibp",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Keys of the unified result envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    IpInfo,
    Geolocation,
    ReverseIp,
    DomainInfo,
    ReverseWhois,
    DnsRecords,
    WhoisHistory,
    Subdomains,
    EmailVerification,
    HunterInfo,
    HunterEnrichment,
    BreachInfo,
    PwnedInfo,
    OsintInfo,
    MalwareInfo,
    LampyreInfo,
    Recommendations,
}

impl Category {
    pub const ALL: [Category; 17] = [
        Category::IpInfo,
        Category::Geolocation,
        Category::ReverseIp,
        Category::DomainInfo,
        Category::ReverseWhois,
        Category::DnsRecords,
        Category::WhoisHistory,
        Category::Subdomains,
        Category::EmailVerification,
        Category::HunterInfo,
        Category::HunterEnrichment,
        Category::BreachInfo,
        Category::PwnedInfo,
        Category::OsintInfo,
        Category::MalwareInfo,
        Category::LampyreInfo,
        Category::Recommendations,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::IpInfo => "ipInfo",
            Category::Geolocation => "geolocation",
            Category::ReverseIp => "reverseIp",
            Category::DomainInfo => "domainInfo",
            Category::ReverseWhois => "reverseWhois",
            Category::DnsRecords => "dnsRecords",
            Category::WhoisHistory => "whoisHistory",
            Category::Subdomains => "subdomains",
            Category::EmailVerification => "emailVerification",
            Category::HunterInfo => "hunterInfo",
            Category::HunterEnrichment => "hunterEnrichment",
            Category::BreachInfo => "breachInfo",
            Category::PwnedInfo => "pwnedInfo",
            Category::OsintInfo => "osintInfo",
            Category::MalwareInfo => "malwareInfo",
            Category::LampyreInfo => "lampyreInfo",
            Category::Recommendations => "recommendations",
        }
    }

    /// List-shaped categories default to `[]`, the rest to `{}`
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            Category::BreachInfo | Category::PwnedInfo | Category::Recommendations
        )
    }

    pub fn empty(&self) -> Value {
        if self.is_list() {
            Value::Array(Vec::new())
        } else {
            Value::Object(serde_json::Map::new())
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Maps a raw vendor payload into its category shape. Must never fail.
pub type Normalizer = fn(&Value) -> Value;

/// When a catalog entry takes part in a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applies {
    Always,
    /// Only for e-mail addresses outside the free-mail provider list
    CorporateDomain,
    /// Only for e-mail addresses at a free-mail provider
    FreeMailDomain,
}

/// Capability descriptor: one vendor endpoint feeding one result category
#[derive(Debug, Clone, Copy)]
pub struct ServiceSpec {
    pub service: Service,
    pub category: Category,
    pub normalize: Normalizer,
    pub applies: Applies,
}

impl ServiceSpec {
    const fn new(service: Service, category: Category, normalize: Normalizer) -> Self {
        Self {
            service,
            category,
            normalize,
            applies: Applies::Always,
        }
    }

    const fn only(mut self, applies: Applies) -> Self {
        self.applies = applies;
        self
    }

    pub fn cache_suffix(&self) -> &'static str {
        self.service.name()
    }

    fn applies_to(&self, free_mail: bool) -> bool {
        match self.applies {
            Applies::Always => true,
            Applies::CorporateDomain => !free_mail,
            Applies::FreeMailDomain => free_mail,
        }
    }
}

/// Consumer mailbox providers; Hunter is skipped for these
pub const DEFAULT_FREE_MAIL_PROVIDERS: &[&str] = &[
    "gmail.com",
    "googlemail.com",
    "hotmail.com",
    "yahoo.com",
    "outlook.com",
    "live.com",
    "aol.com",
    "icloud.com",
    "protonmail.com",
    "gmx.com",
    "mail.ru",
    "yandex.ru",
];

pub fn default_free_mail_providers() -> Vec<String> {
    DEFAULT_FREE_MAIL_PROVIDERS
        .iter()
        .map(|p| p.to_string())
        .collect()
}

pub static IP_SERVICES: &[ServiceSpec] = &[
    ServiceSpec::new(Service::ShodanHost, Category::IpInfo, normalize::shodan),
    ServiceSpec::new(Service::IpGeolocation, Category::Geolocation, normalize::passthrough),
    ServiceSpec::new(Service::ReverseIp, Category::ReverseIp, normalize::passthrough),
    ServiceSpec::new(Service::Lampyre, Category::LampyreInfo, normalize::passthrough),
];

pub static DOMAIN_SERVICES: &[ServiceSpec] = &[
    ServiceSpec::new(Service::Whois, Category::DomainInfo, normalize::whois),
    ServiceSpec::new(Service::DnsLookup, Category::DnsRecords, normalize::passthrough),
    ServiceSpec::new(Service::WhoisHistory, Category::WhoisHistory, normalize::passthrough),
    ServiceSpec::new(Service::Subdomains, Category::Subdomains, normalize::passthrough),
    ServiceSpec::new(Service::ReverseWhois, Category::ReverseWhois, normalize::passthrough),
    ServiceSpec::new(Service::HunterDomainSearch, Category::HunterInfo, normalize::hunter),
    ServiceSpec::new(Service::Leakcheck, Category::BreachInfo, normalize::breach),
    ServiceSpec::new(Service::VirusTotalDomain, Category::MalwareInfo, normalize::virustotal),
];

pub static EMAIL_SERVICES: &[ServiceSpec] = &[
    ServiceSpec::new(Service::EmailVerification, Category::EmailVerification, normalize::passthrough),
    ServiceSpec::new(Service::Whois, Category::DomainInfo, normalize::whois)
        .only(Applies::CorporateDomain),
    ServiceSpec::new(Service::ReverseWhois, Category::ReverseWhois, normalize::passthrough)
        .only(Applies::FreeMailDomain),
    ServiceSpec::new(Service::HunterEmailVerifier, Category::HunterInfo, normalize::hunter)
        .only(Applies::CorporateDomain),
    ServiceSpec::new(Service::HunterEnrichment, Category::HunterEnrichment, normalize::hunter)
        .only(Applies::CorporateDomain),
    ServiceSpec::new(Service::Leakcheck, Category::BreachInfo, normalize::breach),
    ServiceSpec::new(Service::OsintIndustries, Category::OsintInfo, normalize::osint_industries),
    ServiceSpec::new(Service::Hibp, Category::PwnedInfo, normalize::hibp),
    ServiceSpec::new(Service::Lampyre, Category::LampyreInfo, normalize::passthrough),
];

pub static PERSON_SERVICES: &[ServiceSpec] = &[
    ServiceSpec::new(Service::Leakcheck, Category::BreachInfo, normalize::breach),
    ServiceSpec::new(Service::OsintIndustries, Category::OsintInfo, normalize::osint_industries),
    ServiceSpec::new(Service::Lampyre, Category::LampyreInfo, normalize::passthrough),
];

pub static HASH_SERVICES: &[ServiceSpec] = &[
    ServiceSpec::new(Service::Leakcheck, Category::BreachInfo, normalize::breach),
    ServiceSpec::new(Service::VirusTotalFile, Category::MalwareInfo, normalize::virustotal),
];

pub static LEAK_ONLY_SERVICES: &[ServiceSpec] = &[ServiceSpec::new(
    Service::Leakcheck,
    Category::BreachInfo,
    normalize::breach,
)];

/// Full catalog entry list for a query type, before conditional filtering
pub fn services_for(query_type: QueryType) -> &'static [ServiceSpec] {
    match query_type {
        QueryType::Ip => IP_SERVICES,
        QueryType::Domain => DOMAIN_SERVICES,
        QueryType::Email => EMAIL_SERVICES,
        QueryType::Username | QueryType::Phone => PERSON_SERVICES,
        QueryType::Hash => HASH_SERVICES,
        QueryType::Password | QueryType::Keyword | QueryType::Origin => LEAK_ONLY_SERVICES,
    }
}

/// Whether an e-mail domain belongs to a consumer mailbox provider
pub fn is_free_mail<S: AsRef<str>>(domain: &str, providers: &[S]) -> bool {
    let domain = domain.trim().to_lowercase();
    providers
        .iter()
        .any(|p| p.as_ref().trim().eq_ignore_ascii_case(&domain))
}

/// Catalog entries to dispatch for a query
pub fn select_services<S: AsRef<str>>(query: &Query, free_mail_providers: &[S]) -> Vec<&'static ServiceSpec> {
    let free_mail = query
        .email_domain()
        .is_some_and(|domain| is_free_mail(&domain, free_mail_providers));

    services_for(query.query_type)
        .iter()
        .filter(|spec| spec.applies_to(free_mail))
        .collect()
}
