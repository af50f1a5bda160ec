//! Search queries
//!
//! A query is a `(type, value)` pair. Raw request parameters are normalized
//! here (key case folding, trimming) and validated against the recognized
//! query types before anything else happens.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

use crate::CACHE_KEY_PREFIX;

/// Classification of the search subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    Ip,
    Domain,
    Email,
    Username,
    Phone,
    Hash,
    Password,
    Keyword,
    Origin,
}

impl QueryType {
    /// Every recognized query type
    pub const ALL: [QueryType; 9] = [
        QueryType::Ip,
        QueryType::Domain,
        QueryType::Email,
        QueryType::Username,
        QueryType::Phone,
        QueryType::Hash,
        QueryType::Password,
        QueryType::Keyword,
        QueryType::Origin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::Ip => "ip",
            QueryType::Domain => "domain",
            QueryType::Email => "email",
            QueryType::Username => "username",
            QueryType::Phone => "phone",
            QueryType::Hash => "hash",
            QueryType::Password => "password",
            QueryType::Keyword => "keyword",
            QueryType::Origin => "origin",
        }
    }

    /// Guess the query type from the shape of a value.
    ///
    /// Never infers `password` or `origin`; those must be declared.
    pub fn infer(value: &str) -> QueryType {
        let value = value.trim();

        if EMAIL_REGEX.is_match(value) {
            QueryType::Email
        } else if value.parse::<IpAddr>().is_ok() {
            QueryType::Ip
        } else if HASH_REGEX.is_match(value) {
            QueryType::Hash
        } else if PHONE_REGEX.is_match(value)
            && value.chars().filter(|c| c.is_ascii_digit()).count() >= 7
        {
            QueryType::Phone
        } else if DOMAIN_REGEX.is_match(value) {
            QueryType::Domain
        } else if USERNAME_REGEX.is_match(value) {
            QueryType::Username
        } else {
            QueryType::Keyword
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryType {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        QueryType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or(QueryError::UnsupportedType(normalized))
    }
}

/// Parameter validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Missing query or type parameter")]
    MissingParameter,

    /// Carries the rejected type for logging; the message stays fixed
    #[error("Unsupported search type")]
    UnsupportedType(String),
}

/// Type alias that triggers inference instead of naming a type
pub const AUTO_TYPE: &str = "auto";

/// Stand-in for sensitive query values
pub const REDACTED: &str = "[redacted]";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

static HASH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-fA-F0-9]{32}|[a-fA-F0-9]{40}|[a-fA-F0-9]{64})$").unwrap()
});

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9][0-9 ().-]{5,}[0-9]$").unwrap()
});

static DOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}$").unwrap()
});

static USERNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]{2,64}$").unwrap()
});

/// A validated search query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub query_type: QueryType,
    /// Trimmed, never empty
    pub value: String,
}

impl Query {
    pub fn new(query_type: QueryType, value: &str) -> Result<Self, QueryError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(QueryError::MissingParameter);
        }
        Ok(Self {
            query_type,
            value: value.to_string(),
        })
    }

    /// Build a query from raw request parameters.
    ///
    /// Keys are matched case-insensitively and the first occurrence of a key
    /// wins. `type=auto` resolves the type from the value.
    pub fn from_params<I, K, V>(params: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut normalized: HashMap<String, String> = HashMap::new();
        for (key, value) in params {
            normalized
                .entry(key.as_ref().to_lowercase())
                .or_insert_with(|| value.as_ref().trim().to_string());
        }

        let value = normalized
            .get("query")
            .filter(|v| !v.is_empty())
            .ok_or(QueryError::MissingParameter)?;
        let raw_type = normalized
            .get("type")
            .filter(|t| !t.is_empty())
            .ok_or(QueryError::MissingParameter)?
            .to_lowercase();

        let query_type = if raw_type == AUTO_TYPE {
            QueryType::infer(value)
        } else {
            raw_type.parse()?
        };

        Query::new(query_type, value)
    }

    /// Aggregate cache key: `osint:<type>:<value>`, lower-cased
    pub fn cache_key(&self) -> String {
        format!(
            "{}:{}:{}",
            CACHE_KEY_PREFIX,
            self.query_type,
            self.value.to_lowercase()
        )
    }

    /// Per-service cache key: the aggregate key suffixed with a service name
    pub fn service_cache_key(&self, suffix: &str) -> String {
        format!("{}:{}", self.cache_key(), suffix)
    }

    /// Values that must not be echoed into logs or result text
    pub fn is_sensitive(&self) -> bool {
        self.query_type == QueryType::Password
    }

    /// The value as it may appear in logs and advisory text
    pub fn display_value(&self) -> &str {
        if self.is_sensitive() {
            REDACTED
        } else {
            &self.value
        }
    }

    /// Domain part of an e-mail query, lower-cased
    pub fn email_domain(&self) -> Option<String> {
        if self.query_type != QueryType::Email {
            return None;
        }
        self.value
            .rsplit_once('@')
            .map(|(_, domain)| domain.trim().to_lowercase())
            .filter(|domain| !domain.is_empty())
    }

    /// Domain a Whois-style lookup should target
    pub fn lookup_domain(&self) -> String {
        self.email_domain().unwrap_or_else(|| self.value.clone())
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.query_type, self.display_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_params_normalizes_keys_and_values() {
        let query = Query::from_params([("QUERY", "  8.8.8.8 "), ("Type", " IP ")]).unwrap();
        assert_eq!(query.query_type, QueryType::Ip);
        assert_eq!(query.value, "8.8.8.8");
    }

    #[test]
    fn test_missing_parameters() {
        let empty: [(&str, &str); 0] = [];
        assert_eq!(Query::from_params(empty), Err(QueryError::MissingParameter));
        assert_eq!(
            Query::from_params([("type", "ip")]),
            Err(QueryError::MissingParameter)
        );
        assert_eq!(
            Query::from_params([("type", "ip"), ("query", "   ")]),
            Err(QueryError::MissingParameter)
        );
        assert_eq!(
            Query::from_params([("type", " "), ("query", "x")]),
            Err(QueryError::MissingParameter)
        );
    }

    #[test]
    fn test_unsupported_type() {
        let err = Query::from_params([("type", "photo"), ("query", "x")]).unwrap_err();
        assert_eq!(err, QueryError::UnsupportedType("photo".to_string()));
        assert_eq!(err.to_string(), "Unsupported search type");
    }

    #[test]
    fn test_first_key_occurrence_wins() {
        let query =
            Query::from_params([("type", "email"), ("TYPE", "ip"), ("query", "a@b.io")]).unwrap();
        assert_eq!(query.query_type, QueryType::Email);
    }

    #[test]
    fn test_cache_key_is_lowercased() {
        let query = Query::new(QueryType::Email, " User@Example.COM ").unwrap();
        assert_eq!(query.cache_key(), "osint:email:user@example.com");
        assert_eq!(
            query.service_cache_key("leakcheck"),
            "osint:email:user@example.com:leakcheck"
        );
    }

    #[test]
    fn test_email_domain() {
        let query = Query::new(QueryType::Email, "someone@Gmail.com").unwrap();
        assert_eq!(query.email_domain().as_deref(), Some("gmail.com"));
        assert_eq!(query.lookup_domain(), "gmail.com");

        let domain = Query::new(QueryType::Domain, "example.org").unwrap();
        assert_eq!(domain.email_domain(), None);
        assert_eq!(domain.lookup_domain(), "example.org");
    }

    #[test]
    fn test_infer() {
        assert_eq!(QueryType::infer("admin@corp.io"), QueryType::Email);
        assert_eq!(QueryType::infer("8.8.8.8"), QueryType::Ip);
        assert_eq!(QueryType::infer("2001:4860:4860::8888"), QueryType::Ip);
        assert_eq!(
            QueryType::infer("5d41402abc4b2a76b9719d911017c592"),
            QueryType::Hash
        );
        assert_eq!(QueryType::infer("+1 (555) 123-4567"), QueryType::Phone);
        assert_eq!(QueryType::infer("example.com"), QueryType::Domain);
        assert_eq!(QueryType::infer("dark_lord99"), QueryType::Username);
        assert_eq!(QueryType::infer("acme corp leak"), QueryType::Keyword);
    }

    #[test]
    fn test_auto_type_resolves_before_cache_key() {
        let query = Query::from_params([("type", "AUTO"), ("query", "8.8.4.4")]).unwrap();
        assert_eq!(query.query_type, QueryType::Ip);
        assert_eq!(query.cache_key(), "osint:ip:8.8.4.4");
    }

    #[test]
    fn test_password_values_are_redacted_for_display() {
        let query = Query::new(QueryType::Password, "hunter2").unwrap();
        assert!(query.is_sensitive());
        assert_eq!(query.to_string(), "password:[redacted]");
        assert_eq!(query.value, "hunter2");

        let ip = Query::new(QueryType::Ip, "8.8.8.8").unwrap();
        assert_eq!(ip.to_string(), "ip:8.8.8.8");
    }
}
