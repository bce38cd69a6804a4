use serde::{Deserialize, Serialize};
use std::fmt;

pub const FREE_ENDPOINT: &str = "http://ip-api.com";
pub const PRO_ENDPOINT: &str = "http://pro.ip-api.com";
pub const DEFAULT_LANG: &str = "en";

/// Access level of the ip-api service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Free,
    Pro,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub api_key: Option<String>,
    pub lang: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: FREE_ENDPOINT.to_string(),
            api_key: None,
            lang: DEFAULT_LANG.to_string(),
        }
    }
}

impl Config {
    /// Builds a free tier config. An empty `lang` falls back to `"en"`.
    pub fn with_lang(lang: &str) -> Self {
        let lang = if lang.is_empty() { DEFAULT_LANG } else { lang };
        Self {
            lang: lang.to_string(),
            ..Self::default()
        }
    }

    /// Switches to the pro endpoint. Calling it again replaces the key; an
    /// empty key is stored as no key.
    pub fn use_pro(&mut self, api_key: impl Into<String>) {
        let api_key = api_key.into();
        self.base_url = PRO_ENDPOINT.to_string();
        self.api_key = (!api_key.is_empty()).then_some(api_key);
    }

    pub fn tier(&self) -> Tier {
        if self.api_key.is_some() || self.base_url == PRO_ENDPOINT {
            Tier::Pro
        } else {
            Tier::Free
        }
    }
}

/// Location data returned by the `/json/{ip}` endpoint.
///
/// Failed lookups only carry `status` and `message`, so every field falls back
/// to its default when missing from the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationResult {
    pub query: String,
    pub status: String,
    pub message: String,
    pub country: String,
    pub country_code: String,
    pub region: String,
    pub region_name: String,
    pub city: String,
    pub zip: String,
    pub lat: f64,
    pub lon: f64,
    pub timezone: String,
    pub isp: String,
    pub org: String,
    #[serde(rename = "as")]
    pub autonomous_system: String,
}

impl LocationResult {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

impl fmt::Display for LocationResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{}: {}, {}, {} ({}, {})",
            self.query, self.city, self.region_name, self.country, self.lat, self.lon
        )?;
        writeln!(f, "ISP: {}", self.isp)?;
        write!(f, "Org: {}", self.org)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lang_defaults_to_english() {
        let config = Config::with_lang("");
        assert_eq!(config.lang, "en");
        assert_eq!(config.base_url, FREE_ENDPOINT);
        assert_eq!(config.tier(), Tier::Free);

        assert_eq!(Config::with_lang("de").lang, "de");
    }

    #[test]
    fn use_pro_overwrites_key() {
        let mut config = Config::default();
        config.use_pro("first");
        config.use_pro("second");

        assert_eq!(config.tier(), Tier::Pro);
        assert_eq!(config.base_url, PRO_ENDPOINT);
        assert_eq!(config.api_key.as_deref(), Some("second"));
    }

    #[test]
    fn use_pro_with_empty_key() {
        let mut config = Config::default();
        config.use_pro("");

        assert_eq!(config.api_key, None);
        assert_eq!(config.base_url, PRO_ENDPOINT);
        assert_eq!(config.tier(), Tier::Pro);
    }

    #[test]
    fn decodes_fail_body_with_defaults() {
        let loc: LocationResult =
            serde_json::from_str(r#"{"status":"fail","message":"private range"}"#).unwrap();

        assert!(!loc.is_success());
        assert_eq!(loc.message, "private range");
        assert_eq!(loc.country, "");
        assert_eq!(loc.lat, 0.0);
    }

    #[test]
    fn as_field_uses_wire_name() {
        let loc: LocationResult =
            serde_json::from_str(r#"{"status":"success","as":"AS5769 Videotron Telecom Ltee"}"#)
                .unwrap();
        assert_eq!(loc.autonomous_system, "AS5769 Videotron Telecom Ltee");

        let value = serde_json::to_value(&loc).unwrap();
        assert_eq!(value["as"], "AS5769 Videotron Telecom Ltee");
        assert!(value.get("countryCode").is_some());
    }
}
