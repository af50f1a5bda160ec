//! Response normalizers
//!
//! Vendor payloads are narrowed through explicit optional-field structs and
//! reshaped into the unified category layout. A payload that is `null`, the
//! wrong shape, or missing fields yields neutral defaults; normalizers never
//! fail. Every field is read on its own, so one malformed field or record
//! costs only itself.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Map, Value};

/// Narrow a raw payload into a vendor struct, `None` if it does not fit
fn narrow<T: DeserializeOwned>(raw: &Value) -> Option<T> {
    if raw.is_null() {
        return None;
    }
    serde_json::from_value(raw.clone()).ok()
}

/// Field deserializers that turn a mismatched value into `None`
mod loose {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn text(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Any value that fits `T`
    pub fn opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(serde_json::from_value(value).ok())
    }

    /// A string, or a number or bool rendered as one
    pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(text)
    }

    /// Scalar members of an array as strings; `null` and nested members are skipped
    pub fn strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => Some(items.into_iter().filter_map(text).collect()),
            _ => None,
        })
    }

    /// A non-negative integer, `0` otherwise
    pub fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Value::deserialize(deserializer)?.as_u64().unwrap_or_default())
    }

    /// Array members that fit `T`; the rest are skipped
    pub fn list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => Some(
                items
                    .into_iter()
                    .filter_map(|item| serde_json::from_value(item).ok())
                    .collect(),
            ),
            _ => None,
        })
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// Truthiness in the loose sense vendors use for flags like `found`
fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(_) => true,
        Value::Null => false,
    }
}

/// Number or string as a JSON scalar, `""` when absent
fn scalar_or_blank(value: Option<Value>) -> Value {
    match value {
        Some(v @ Value::Number(_)) | Some(v @ Value::String(_)) => v,
        _ => Value::String(String::new()),
    }
}

/// Raw vendor JSON for categories without a dedicated shape
pub fn passthrough(raw: &Value) -> Value {
    if raw.is_null() {
        empty_object()
    } else {
        raw.clone()
    }
}

// ---------------------------------------------------------------------------
// WhoisXML
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WhoisResponse {
    #[serde(rename = "WhoisRecord", deserialize_with = "loose::opt")]
    whois_record: Option<WhoisRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WhoisRecord {
    #[serde(deserialize_with = "loose::string")]
    domain_name: Option<String>,
    #[serde(deserialize_with = "loose::string")]
    registrar_name: Option<String>,
    #[serde(deserialize_with = "loose::opt")]
    registry_data: Option<RegistryData>,
    #[serde(deserialize_with = "loose::opt")]
    audit: Option<WhoisAudit>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RegistryData {
    #[serde(deserialize_with = "loose::string")]
    created_date: Option<String>,
    #[serde(deserialize_with = "loose::string")]
    updated_date: Option<String>,
    #[serde(deserialize_with = "loose::string")]
    expires_date: Option<String>,
    #[serde(deserialize_with = "loose::opt")]
    registrant: Option<WhoisContact>,
    #[serde(deserialize_with = "loose::opt")]
    name_servers: Option<NameServers>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WhoisAudit {
    #[serde(deserialize_with = "loose::string")]
    created_date: Option<String>,
    #[serde(deserialize_with = "loose::string")]
    updated_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WhoisContact {
    #[serde(deserialize_with = "loose::string")]
    name: Option<String>,
    #[serde(deserialize_with = "loose::string")]
    email: Option<String>,
    #[serde(deserialize_with = "loose::string")]
    street1: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct NameServers {
    #[serde(deserialize_with = "loose::strings")]
    host_names: Option<Vec<String>>,
}

/// Whois record → `domainInfo`
pub fn whois(raw: &Value) -> Value {
    let Some(record) = narrow::<WhoisResponse>(raw).and_then(|r| r.whois_record) else {
        return empty_object();
    };

    let registry = record.registry_data.unwrap_or_default();
    let audit = record.audit.unwrap_or_default();

    let registrant = match registry.registrant {
        Some(contact) => json!({
            "name": contact.name.unwrap_or_default(),
            "email": contact.email.unwrap_or_default(),
            "address": contact.street1.unwrap_or_default(),
        }),
        None => empty_object(),
    };

    json!({
        "domainName": record.domain_name.unwrap_or_default(),
        "createdDate": registry.created_date.or(audit.created_date).unwrap_or_default(),
        "updatedDate": registry.updated_date.or(audit.updated_date).unwrap_or_default(),
        "expiresDate": registry.expires_date.unwrap_or_default(),
        "registrar": record.registrar_name.unwrap_or_default(),
        "registrant": registrant,
        "nameServers": registry
            .name_servers
            .and_then(|ns| ns.host_names)
            .unwrap_or_default(),
    })
}

// ---------------------------------------------------------------------------
// Leakcheck
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LeakcheckResponse {
    /// Boolean in v1, match count in v2
    found: Option<Value>,
    #[serde(deserialize_with = "loose::list")]
    result: Option<Vec<LeakcheckRecord>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LeakcheckRecord {
    #[serde(deserialize_with = "loose::opt")]
    source: Option<LeakcheckSource>,
    #[serde(deserialize_with = "loose::strings")]
    fields: Option<Vec<String>>,
    #[serde(deserialize_with = "loose::string")]
    password: Option<String>,
    #[serde(deserialize_with = "loose::string")]
    email: Option<String>,
    #[serde(deserialize_with = "loose::string")]
    username: Option<String>,
    #[serde(deserialize_with = "loose::string")]
    first_name: Option<String>,
    #[serde(deserialize_with = "loose::string")]
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LeakcheckSource {
    #[serde(deserialize_with = "loose::string")]
    name: Option<String>,
    #[serde(deserialize_with = "loose::string")]
    breach_date: Option<String>,
}

/// Leakcheck lookup → `breachInfo`
pub fn breach(raw: &Value) -> Value {
    let Some(response) = narrow::<LeakcheckResponse>(raw) else {
        return json!([]);
    };
    if !response.found.as_ref().is_some_and(truthy) {
        return json!([]);
    }

    let records: Vec<Value> = response
        .result
        .unwrap_or_default()
        .into_iter()
        .map(|record| {
            let source = record.source.unwrap_or_default();
            let name = record
                .first_name
                .filter(|n| !n.is_empty())
                .or(record.name)
                .unwrap_or_default();
            json!({
                "source": source.name.filter(|n| !n.is_empty()).unwrap_or_else(|| "unknown".to_string()),
                "breachDate": source.breach_date.unwrap_or_default(),
                "fields": record.fields.unwrap_or_default(),
                "credentials": {
                    "password": record.password.unwrap_or_default(),
                    "email": record.email.unwrap_or_default(),
                    "username": record.username.unwrap_or_default(),
                    "name": name,
                },
            })
        })
        .collect();

    Value::Array(records)
}

// ---------------------------------------------------------------------------
// Have I Been Pwned
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct HibpBreach {
    #[serde(deserialize_with = "loose::string")]
    name: Option<String>,
    #[serde(deserialize_with = "loose::string")]
    breach_date: Option<String>,
    #[serde(deserialize_with = "loose::string")]
    description: Option<String>,
    #[serde(deserialize_with = "loose::strings")]
    data_classes: Option<Vec<String>>,
}

/// HIBP breached-account listing → `pwnedInfo`
pub fn hibp(raw: &Value) -> Value {
    let breaches = raw.as_array().into_iter().flatten().filter_map(narrow::<HibpBreach>);
    Value::Array(
        breaches
            .map(|b| {
                json!({
                    "name": b.name.unwrap_or_default(),
                    "breachDate": b.breach_date.unwrap_or_default(),
                    "description": b.description.unwrap_or_default(),
                    "fields": b.data_classes.unwrap_or_default(),
                })
            })
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// OSINT Industries
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OsintModule {
    #[serde(deserialize_with = "loose::string")]
    module: Option<String>,
    #[serde(deserialize_with = "loose::string")]
    status: Option<String>,
    data: Option<Value>,
}

/// OSINT Industries module list → `osintInfo`
pub fn osint_industries(raw: &Value) -> Value {
    if !raw.is_array() {
        return empty_object();
    }
    let modules: Vec<Value> = raw
        .as_array()
        .into_iter()
        .flatten()
        .map(|entry| {
            let module = narrow::<OsintModule>(entry).unwrap_or_default();
            json!({
                "module": module.module.unwrap_or_default(),
                "status": module.status.unwrap_or_default(),
                "data": module.data.filter(|d| !d.is_null()).unwrap_or_else(empty_object),
            })
        })
        .collect();

    json!({ "modules": modules })
}

// ---------------------------------------------------------------------------
// Shodan
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ShodanHost {
    #[serde(deserialize_with = "loose::string")]
    ip_str: Option<String>,
    #[serde(deserialize_with = "loose::string")]
    org: Option<String>,
    #[serde(deserialize_with = "loose::strings")]
    hostnames: Option<Vec<String>>,
    #[serde(deserialize_with = "loose::list")]
    ports: Option<Vec<u16>>,
    #[serde(deserialize_with = "loose::opt")]
    location: Option<ShodanLocation>,
    #[serde(flatten)]
    top_level: ShodanLocation,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ShodanLocation {
    #[serde(deserialize_with = "loose::string")]
    city: Option<String>,
    #[serde(deserialize_with = "loose::string")]
    region_code: Option<String>,
    #[serde(deserialize_with = "loose::string")]
    country_name: Option<String>,
    latitude: Option<Value>,
    longitude: Option<Value>,
}

impl ShodanLocation {
    fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.region_code.is_none()
            && self.country_name.is_none()
            && self.latitude.as_ref().map_or(true, Value::is_null)
            && self.longitude.as_ref().map_or(true, Value::is_null)
    }

    fn into_value(self) -> Value {
        json!({
            "city": self.city.unwrap_or_default(),
            "region": self.region_code.unwrap_or_default(),
            "country": self.country_name.unwrap_or_default(),
            "latitude": scalar_or_blank(self.latitude),
            "longitude": scalar_or_blank(self.longitude),
        })
    }
}

/// Shodan host record → `ipInfo`
pub fn shodan(raw: &Value) -> Value {
    let Some(host) = narrow::<ShodanHost>(raw) else {
        return empty_object();
    };

    // A nested location object wins over the top-level geo fields
    let location = match host.location {
        Some(location) => location.into_value(),
        None if !host.top_level.is_empty() => host.top_level.into_value(),
        None => empty_object(),
    };

    json!({
        "ip": host.ip_str.unwrap_or_default(),
        "organization": host.org.unwrap_or_default(),
        "hostnames": host.hostnames.unwrap_or_default(),
        "ports": host.ports.unwrap_or_default(),
        "location": location,
    })
}

// ---------------------------------------------------------------------------
// VirusTotal
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VtResponse {
    #[serde(deserialize_with = "loose::opt")]
    data: Option<VtObject>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VtObject {
    #[serde(deserialize_with = "loose::string")]
    id: Option<String>,
    #[serde(rename = "type", deserialize_with = "loose::string")]
    object_type: Option<String>,
    #[serde(deserialize_with = "loose::opt")]
    attributes: Option<VtAttributes>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VtAttributes {
    #[serde(deserialize_with = "loose::opt")]
    reputation: Option<i64>,
    #[serde(deserialize_with = "loose::opt")]
    last_analysis_stats: Option<VtStats>,
    #[serde(deserialize_with = "loose::strings")]
    tags: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VtStats {
    #[serde(deserialize_with = "loose::count")]
    malicious: u64,
    #[serde(deserialize_with = "loose::count")]
    suspicious: u64,
    #[serde(deserialize_with = "loose::count")]
    harmless: u64,
    #[serde(deserialize_with = "loose::count")]
    undetected: u64,
}

/// VirusTotal file/domain object → `malwareInfo`
pub fn virustotal(raw: &Value) -> Value {
    let Some(object) = narrow::<VtResponse>(raw).and_then(|r| r.data) else {
        return empty_object();
    };
    let attributes = object.attributes.unwrap_or_default();
    let stats = attributes.last_analysis_stats.unwrap_or_default();

    json!({
        "id": object.id.unwrap_or_default(),
        "type": object.object_type.unwrap_or_default(),
        "reputation": attributes.reputation.unwrap_or_default(),
        "lastAnalysisStats": {
            "malicious": stats.malicious,
            "suspicious": stats.suspicious,
            "harmless": stats.harmless,
            "undetected": stats.undetected,
        },
        "tags": attributes.tags.unwrap_or_default(),
    })
}

// ---------------------------------------------------------------------------
// Hunter
// ---------------------------------------------------------------------------

/// Hunter wraps every answer in a `data` envelope
pub fn hunter(raw: &Value) -> Value {
    match raw.get("data") {
        Some(data) if data.is_object() => data.clone(),
        _ => empty_object(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shodan_example() {
        let raw = json!({
            "ip_str": "8.8.8.8",
            "org": "Google",
            "hostnames": ["dns.google"],
            "ports": [53, 443]
        });
        assert_eq!(
            shodan(&raw),
            json!({
                "ip": "8.8.8.8",
                "organization": "Google",
                "hostnames": ["dns.google"],
                "ports": [53, 443],
                "location": {}
            })
        );
    }

    #[test]
    fn test_shodan_location() {
        let raw = json!({
            "ip_str": "1.1.1.1",
            "location": {"city": "Sydney", "country_name": "Australia", "latitude": -33.86}
        });
        let location = &shodan(&raw)["location"];
        assert_eq!(location["city"], "Sydney");
        assert_eq!(location["region"], "");
        assert_eq!(location["latitude"], json!(-33.86));
        assert_eq!(location["longitude"], "");
    }

    #[test]
    fn test_shodan_top_level_geo_fallback() {
        let raw = json!({"ip_str": "1.1.1.1", "city": "Brisbane", "country_name": "Australia"});
        assert_eq!(shodan(&raw)["location"]["city"], "Brisbane");
    }

    #[test]
    fn test_breach_not_found() {
        assert_eq!(breach(&json!({"found": false})), json!([]));
        assert_eq!(breach(&json!({"success": true, "found": 0, "result": []})), json!([]));
        assert_eq!(breach(&json!({})), json!([]));
        assert_eq!(breach(&Value::Null), json!([]));
    }

    #[test]
    fn test_breach_records() {
        let raw = json!({
            "success": true,
            "found": 2,
            "result": [
                {
                    "source": {"name": "Collection1", "breach_date": "2019-01"},
                    "fields": ["email", "password"],
                    "email": "a@b.io",
                    "password": "hunter2",
                    "first_name": "Alice"
                },
                {"username": "bob"}
            ]
        });

        let normalized = breach(&raw);
        let records = normalized.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["source"], "Collection1");
        assert_eq!(records[0]["breachDate"], "2019-01");
        assert_eq!(records[0]["credentials"]["name"], "Alice");
        assert_eq!(records[0]["credentials"]["password"], "hunter2");
        assert_eq!(records[1]["source"], "unknown");
        assert_eq!(records[1]["fields"], json!([]));
        assert_eq!(records[1]["credentials"]["username"], "bob");
        assert_eq!(records[1]["credentials"]["email"], "");
    }

    #[test]
    fn test_whois_prefers_registry_dates() {
        let raw = json!({
            "WhoisRecord": {
                "domainName": "example.com",
                "registrarName": "RESERVED-IANA",
                "registryData": {
                    "createdDate": "1995-08-14T04:00:00Z",
                    "expiresDate": "2026-08-13T04:00:00Z",
                    "registrant": {"name": "IANA", "street1": "12025 Waterfront Dr"},
                    "nameServers": {"hostNames": ["A.IANA-SERVERS.NET"]}
                },
                "audit": {"createdDate": "2020-01-01", "updatedDate": "2024-02-02"}
            }
        });

        let info = whois(&raw);
        assert_eq!(info["domainName"], "example.com");
        assert_eq!(info["createdDate"], "1995-08-14T04:00:00Z");
        assert_eq!(info["updatedDate"], "2024-02-02");
        assert_eq!(info["registrar"], "RESERVED-IANA");
        assert_eq!(info["registrant"]["address"], "12025 Waterfront Dr");
        assert_eq!(info["registrant"]["email"], "");
        assert_eq!(info["nameServers"], json!(["A.IANA-SERVERS.NET"]));
    }

    #[test]
    fn test_whois_missing_record() {
        assert_eq!(whois(&json!({"ErrorMessage": {"msg": "quota"}})), json!({}));
        assert_eq!(whois(&Value::Null), json!({}));

        let bare = whois(&json!({"WhoisRecord": {}}));
        assert_eq!(bare["registrant"], json!({}));
        assert_eq!(bare["nameServers"], json!([]));
    }

    #[test]
    fn test_osint_industries_modules() {
        let raw = json!([
            {"module": "github", "status": "found", "data": {"login": "neo"}},
            {"module": "spotify"}
        ]);
        assert_eq!(
            osint_industries(&raw),
            json!({"modules": [
                {"module": "github", "status": "found", "data": {"login": "neo"}},
                {"module": "spotify", "status": "", "data": {}}
            ]})
        );
        assert_eq!(osint_industries(&json!({"error": "x"})), json!({}));
    }

    #[test]
    fn test_hibp() {
        let raw = json!([{"Name": "Adobe", "BreachDate": "2013-10-04", "DataClasses": ["Passwords"]}]);
        assert_eq!(
            hibp(&raw),
            json!([{"name": "Adobe", "breachDate": "2013-10-04", "description": "", "fields": ["Passwords"]}])
        );
        assert_eq!(hibp(&Value::Null), json!([]));
    }

    #[test]
    fn test_virustotal() {
        let raw = json!({
            "data": {
                "id": "44d88612fea8a8f36de82e1278abb02f",
                "type": "file",
                "attributes": {"reputation": -5, "last_analysis_stats": {"malicious": 60, "harmless": 0}}
            }
        });
        let info = virustotal(&raw);
        assert_eq!(info["type"], "file");
        assert_eq!(info["reputation"], -5);
        assert_eq!(info["lastAnalysisStats"]["malicious"], 60);
        assert_eq!(info["lastAnalysisStats"]["undetected"], 0);
        assert_eq!(info["tags"], json!([]));
    }

    #[test]
    fn test_hunter_unwraps_data() {
        assert_eq!(hunter(&json!({"data": {"status": "valid"}})), json!({"status": "valid"}));
        assert_eq!(hunter(&json!({"errors": []})), json!({}));
    }

    #[test]
    fn test_breach_keeps_records_around_a_malformed_one() {
        let raw = json!({
            "found": 3,
            "result": [
                {"source": {"name": "Collection1"}, "email": "a@b.io"},
                {"username": 42, "fields": ["email", null, {"x": 1}]},
                null
            ]
        });

        let normalized = breach(&raw);
        let records = normalized.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["credentials"]["email"], "a@b.io");
        assert_eq!(records[1]["credentials"]["username"], "42");
        assert_eq!(records[1]["fields"], json!(["email"]));
    }

    #[test]
    fn test_shodan_survives_odd_fields() {
        let raw = json!({
            "ip_str": "1.1.1.1",
            "org": "X",
            "hostnames": ["a", null],
            "ports": [53, "x", 70000],
            "location": "unknown"
        });
        assert_eq!(
            shodan(&raw),
            json!({
                "ip": "1.1.1.1",
                "organization": "X",
                "hostnames": ["a"],
                "ports": [53],
                "location": {}
            })
        );
    }

    #[test]
    fn test_whois_bad_field_costs_only_itself() {
        let raw = json!({
            "WhoisRecord": {
                "domainName": "example.com",
                "registrarName": {"unexpected": true},
                "registryData": {"createdDate": "1995-08-14", "nameServers": {"hostNames": "ns1"}}
            }
        });
        let info = whois(&raw);
        assert_eq!(info["domainName"], "example.com");
        assert_eq!(info["registrar"], "");
        assert_eq!(info["createdDate"], "1995-08-14");
        assert_eq!(info["nameServers"], json!([]));
    }

    #[test]
    fn test_hibp_skips_malformed_entries() {
        let raw = json!([
            {"Name": "Adobe", "DataClasses": ["Passwords", null]},
            null,
            {"Name": 7, "BreachDate": null}
        ]);
        assert_eq!(
            hibp(&raw),
            json!([
                {"name": "Adobe", "breachDate": "", "description": "", "fields": ["Passwords"]},
                {"name": "7", "breachDate": "", "description": "", "fields": []}
            ])
        );
    }

    #[test]
    fn test_virustotal_odd_stats() {
        let raw = json!({
            "data": {
                "id": "abc",
                "attributes": {"reputation": "bad", "last_analysis_stats": {"malicious": "3", "harmless": 2}}
            }
        });
        let info = virustotal(&raw);
        assert_eq!(info["id"], "abc");
        assert_eq!(info["reputation"], 0);
        assert_eq!(info["lastAnalysisStats"]["malicious"], 0);
        assert_eq!(info["lastAnalysisStats"]["harmless"], 2);
    }

    #[test]
    fn test_null_inputs_return_defaults() {
        assert_eq!(passthrough(&Value::Null), json!({}));
        assert_eq!(shodan(&Value::Null), json!({}));
        assert_eq!(virustotal(&Value::Null), json!({}));
        assert_eq!(osint_industries(&Value::Null), json!({}));
    }
}
