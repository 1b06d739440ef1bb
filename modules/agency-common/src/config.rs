use std::env;
use std::path::PathBuf;

use chrono::Locale;

use crate::error::AgencyError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Web server
    pub web_host: String,
    pub web_port: u16,

    // Content
    pub data_path: PathBuf,
    pub assets_dir: PathBuf,

    // Presentation
    pub site_name: String,
    pub date_locale: Locale,
}

impl Config {
    /// Load configuration from the process environment (and `.env`, if present).
    pub fn from_env() -> Result<Self, AgencyError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AgencyError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let web_port = match lookup("WEB_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| AgencyError::Config(format!("WEB_PORT must be a number, got {raw:?}")))?,
            None => 3000,
        };

        let locale_name = lookup("DATE_LOCALE").unwrap_or_else(|| "en_US".to_string());
        let date_locale = parse_locale(&locale_name)?;

        Ok(Self {
            web_host: lookup("WEB_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            web_port,
            data_path: lookup("CLIENTS_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/clients.json")),
            assets_dir: lookup("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public/images")),
            site_name: lookup("SITE_NAME").unwrap_or_else(|| "Northwind Studio".to_string()),
            date_locale,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.web_host, self.web_port)
    }
}

/// Accepts POSIX-style names (`en_US`, `fr_FR`) and BCP 47 style (`en-US`).
fn parse_locale(name: &str) -> Result<Locale, AgencyError> {
    let normalized = name.trim().replace('-', "_");
    Locale::try_from(normalized.as_str())
        .map_err(|_| AgencyError::Config(format!("DATE_LOCALE {name:?} is not a known locale")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.web_port, 3000);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.data_path, PathBuf::from("data/clients.json"));
        assert_eq!(config.assets_dir, PathBuf::from("public/images"));
        assert_eq!(config.date_locale, Locale::en_US);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("WEB_HOST", "127.0.0.1"),
            ("WEB_PORT", "8080"),
            ("CLIENTS_DATA_PATH", "/srv/clients.json"),
            ("DATE_LOCALE", "fr-FR"),
            ("SITE_NAME", "Acme Agency"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.data_path, PathBuf::from("/srv/clients.json"));
        assert_eq!(config.date_locale, Locale::fr_FR);
        assert_eq!(config.site_name, "Acme Agency");
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_lookup(lookup_from(&[("WEB_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, AgencyError::Config(_)));
    }

    #[test]
    fn rejects_unknown_locale() {
        let err = Config::from_lookup(lookup_from(&[("DATE_LOCALE", "xx_YY")])).unwrap_err();
        assert!(matches!(err, AgencyError::Config(_)));
    }
}
