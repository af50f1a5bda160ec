//! Vendor credentials

use fox_core::Vendor;
use serde::Deserialize;
use std::fmt;

/// API keys for every vendor, all optional
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct VendorCredentials {
    pub shodan: Option<String>,
    pub whoisxml: Option<String>,
    pub hunter: Option<String>,
    pub leakcheck: Option<String>,
    pub osint_industries: Option<String>,
    pub virustotal: Option<String>,
    pub lampyre: Option<String>,
    pub hibp: Option<String>,
}

/// Environment variables consulted per vendor, in priority order
fn env_vars(vendor: Vendor) -> &'static [&'static str] {
    match vendor {
        Vendor::Shodan => &["SHODAN_API_KEY"],
        Vendor::WhoisXml => &["WHOISXML_API_KEY"],
        Vendor::Hunter => &["HUNTER_API_KEY"],
        Vendor::Leakcheck => &["LEAKCHECK_API_KEY"],
        Vendor::OsintIndustries => &["OSINT_INDUSTRIES_API_KEY", "OSINTindustries_API_KEY"],
        Vendor::VirusTotal => &["VIRUSTOTAL_API_KEY"],
        Vendor::Lampyre => &["LAMPYRE_API_KEY"],
        Vendor::Hibp => &["HIBP_API_KEY"],
    }
}

impl VendorCredentials {
    /// Credentials read from the process environment only
    pub fn from_env() -> Self {
        let mut credentials = Self::default();
        credentials.merge_env();
        credentials
    }

    /// Override keys with any set in the process environment
    pub fn merge_env(&mut self) {
        self.merge_from(|name| std::env::var(name).ok());
    }

    /// Override keys from an arbitrary variable lookup
    pub fn merge_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        for vendor in Vendor::ALL {
            let value = env_vars(vendor)
                .iter()
                .filter_map(|name| lookup(name))
                .map(|v| v.trim().to_string())
                .find(|v| !v.is_empty());
            if let Some(value) = value {
                *self.slot(vendor) = Some(value);
            }
        }
    }

    fn slot(&mut self, vendor: Vendor) -> &mut Option<String> {
        match vendor {
            Vendor::Shodan => &mut self.shodan,
            Vendor::WhoisXml => &mut self.whoisxml,
            Vendor::Hunter => &mut self.hunter,
            Vendor::Leakcheck => &mut self.leakcheck,
            Vendor::OsintIndustries => &mut self.osint_industries,
            Vendor::VirusTotal => &mut self.virustotal,
            Vendor::Lampyre => &mut self.lampyre,
            Vendor::Hibp => &mut self.hibp,
        }
    }

    pub fn key(&self, vendor: Vendor) -> Option<&str> {
        let key = match vendor {
            Vendor::Shodan => &self.shodan,
            Vendor::WhoisXml => &self.whoisxml,
            Vendor::Hunter => &self.hunter,
            Vendor::Leakcheck => &self.leakcheck,
            Vendor::OsintIndustries => &self.osint_industries,
            Vendor::VirusTotal => &self.virustotal,
            Vendor::Lampyre => &self.lampyre,
            Vendor::Hibp => &self.hibp,
        };
        key.as_deref().filter(|k| !k.trim().is_empty())
    }

    /// Owned copy of a key, for handing to an adapter
    pub fn owned(&self, vendor: Vendor) -> Option<String> {
        self.key(vendor).map(str::to_string)
    }

    /// Vendors with a usable key
    pub fn configured(&self) -> Vec<Vendor> {
        Vendor::ALL
            .into_iter()
            .filter(|v| self.key(*v).is_some())
            .collect()
    }
}

impl fmt::Debug for VendorCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("VendorCredentials");
        for vendor in Vendor::ALL {
            let shown = if self.key(vendor).is_some() {
                "<redacted>"
            } else {
                "<unset>"
            };
            s.field(vendor.name(), &shown);
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut credentials = VendorCredentials {
            shodan: Some("from-file".into()),
            hunter: Some("hunter-file".into()),
            ..Default::default()
        };
        credentials.merge_from(lookup(&[("SHODAN_API_KEY", "from-env"), ("HUNTER_API_KEY", "")]));

        assert_eq!(credentials.key(Vendor::Shodan), Some("from-env"));
        assert_eq!(credentials.key(Vendor::Hunter), Some("hunter-file"));
        assert_eq!(credentials.key(Vendor::Hibp), None);
    }

    #[test]
    fn test_legacy_osint_industries_variable() {
        let mut credentials = VendorCredentials::default();
        credentials.merge_from(lookup(&[("OSINTindustries_API_KEY", "legacy")]));
        assert_eq!(credentials.key(Vendor::OsintIndustries), Some("legacy"));

        credentials.merge_from(lookup(&[
            ("OSINT_INDUSTRIES_API_KEY", "current"),
            ("OSINTindustries_API_KEY", "legacy"),
        ]));
        assert_eq!(credentials.key(Vendor::OsintIndustries), Some("current"));
    }

    #[test]
    fn test_debug_redacts_keys() {
        let credentials = VendorCredentials {
            virustotal: Some("vt-secret-123".into()),
            ..Default::default()
        };
        let rendered = format!("{:?}", credentials);
        assert!(!rendered.contains("vt-secret-123"));
        assert!(rendered.contains("virustotal: \"<redacted>\""));
        assert!(rendered.contains("shodan: \"<unset>\""));
        assert_eq!(credentials.configured(), vec![Vendor::VirusTotal]);
    }

    #[test]
    fn test_deserialize_partial_table() {
        let credentials: VendorCredentials =
            serde_json::from_value(serde_json::json!({"leakcheck": "lk"})).unwrap();
        assert_eq!(credentials.key(Vendor::Leakcheck), Some("lk"));
        assert_eq!(credentials.configured().len(), 1);
    }
}
