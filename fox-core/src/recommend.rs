//! Advisory recommendations derived from merged results

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde_json::Value;

use crate::{Category, Query, UnifiedResult};

/// Ports whose public exposure is worth flagging
const RISKY_PORTS: &[u64] = &[21, 23, 445, 1433, 3306, 3389, 5432, 5900, 6379, 9200, 27017];

/// Registrations expiring within this window are flagged
const EXPIRY_WARNING_DAYS: i64 = 30;

fn list_len(results: &UnifiedResult, category: Category) -> usize {
    results
        .get(category)
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

/// WhoisXML emits both RFC 3339 and `YYYY-MM-DD HH:MM:SS UTC` dates
fn parse_whois_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|d| d.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw.trim_end_matches(" UTC"), "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

/// Build recommendations for a merged result
pub fn recommendations(query: &Query, results: &UnifiedResult, now: DateTime<Utc>) -> Vec<String> {
    let mut advice = Vec::new();

    let breaches = list_len(results, Category::BreachInfo);
    if breaches > 0 {
        advice.push(format!(
            "Found {} breach record(s) for {}; rotate any credentials tied to it.",
            breaches,
            query.display_value()
        ));

        let exposed_passwords = results
            .get(Category::BreachInfo)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter(|record| {
                record["credentials"]["password"]
                    .as_str()
                    .is_some_and(|p| !p.is_empty())
            })
            .count();
        if exposed_passwords > 0 {
            advice.push(format!(
                "{} breach record(s) include a password; enforce a reset and enable MFA.",
                exposed_passwords
            ));
        }
    }

    let pwned = list_len(results, Category::PwnedInfo);
    if pwned > 0 {
        advice.push(format!(
            "Account appears in {} publicly indexed breach(es).",
            pwned
        ));
    }

    if let Some(ports) = results
        .get(Category::IpInfo)
        .and_then(|info| info.get("ports"))
        .and_then(Value::as_array)
    {
        let risky: Vec<String> = ports
            .iter()
            .filter_map(Value::as_u64)
            .filter(|p| RISKY_PORTS.contains(p))
            .map(|p| p.to_string())
            .collect();
        if !risky.is_empty() {
            advice.push(format!(
                "Host exposes high-risk services on port(s) {}; restrict public access.",
                risky.join(", ")
            ));
        }
    }

    if let Some(expires) = results
        .get(Category::DomainInfo)
        .and_then(|info| info.get("expiresDate"))
        .and_then(Value::as_str)
        .and_then(parse_whois_date)
    {
        if expires <= now + Duration::days(EXPIRY_WARNING_DAYS) {
            advice.push(format!(
                "Domain registration expires on {}; renew it to prevent takeover.",
                expires.format("%Y-%m-%d")
            ));
        }
    }

    let hits = results
        .get(Category::OsintInfo)
        .and_then(|info| info.get("modules"))
        .and_then(Value::as_array)
        .map_or(0, |modules| {
            modules
                .iter()
                .filter(|m| m["status"].as_str() == Some("found"))
                .count()
        });
    if hits > 0 {
        advice.push(format!(
            "{} online account(s) are linked to this identifier; review their public exposure.",
            hits
        ));
    }

    if let Some(malicious) = results
        .get(Category::MalwareInfo)
        .and_then(|info| info.pointer("/lastAnalysisStats/malicious"))
        .and_then(Value::as_u64)
        .filter(|n| *n > 0)
    {
        advice.push(format!(
            "Flagged as malicious by {} engine(s); block and investigate.",
            malicious
        ));
    }

    advice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QueryType;
    use chrono::TimeZone;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_no_evidence_no_advice() {
        let query = Query::new(QueryType::Ip, "8.8.8.8").unwrap();
        assert!(recommendations(&query, &UnifiedResult::new(), now()).is_empty());
    }

    #[test]
    fn test_breach_and_password_advice() {
        let query = Query::new(QueryType::Email, "a@b.io").unwrap();
        let mut results = UnifiedResult::new();
        results.set(
            Category::BreachInfo,
            json!([
                {"source": "x", "credentials": {"password": "p4ss"}},
                {"source": "y", "credentials": {"password": ""}}
            ]),
        );

        let advice = recommendations(&query, &results, now());
        assert_eq!(advice.len(), 2);
        assert!(advice[0].contains("2 breach record(s)"));
        assert!(advice[1].starts_with("1 breach record(s) include a password"));
    }

    #[test]
    fn test_password_queries_are_not_echoed() {
        let query = Query::new(QueryType::Password, "hunter2").unwrap();
        let mut results = UnifiedResult::new();
        results.set(Category::BreachInfo, json!([{"source": "x"}]));

        let advice = recommendations(&query, &results, now());
        assert!(advice[0].contains("[redacted]"));
        assert!(advice.iter().all(|line| !line.contains("hunter2")));
    }

    #[test]
    fn test_risky_ports() {
        let query = Query::new(QueryType::Ip, "10.0.0.1").unwrap();
        let mut results = UnifiedResult::new();
        results.set(Category::IpInfo, json!({"ports": [443, 3389, 6379]}));

        let advice = recommendations(&query, &results, now());
        assert_eq!(advice.len(), 1);
        assert!(advice[0].contains("3389, 6379"));
    }

    #[test]
    fn test_expiring_domain() {
        let query = Query::new(QueryType::Domain, "example.com").unwrap();
        let mut results = UnifiedResult::new();
        results.set(Category::DomainInfo, json!({"expiresDate": "2026-01-15 00:00:00 UTC"}));
        assert_eq!(recommendations(&query, &results, now()).len(), 1);

        results.set(Category::DomainInfo, json!({"expiresDate": "2030-01-15T00:00:00Z"}));
        assert!(recommendations(&query, &results, now()).is_empty());
    }

    #[test]
    fn test_error_markers_are_ignored() {
        let query = Query::new(QueryType::Hash, "44d88612fea8a8f36de82e1278abb02f").unwrap();
        let mut results = UnifiedResult::new();
        results.set(Category::MalwareInfo, json!({"error": "HTTP error! status: 404"}));
        results.set(Category::BreachInfo, json!({"error": "timeout"}));
        assert!(recommendations(&query, &results, now()).is_empty());
    }
}
