//! Process configuration, read once at startup.

use crate::{Error, Result};

pub const DEFAULT_PORT: u16 = 4000;

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from the environment, after applying any `.env` file.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gemini_api_key = lookup("GEMINI_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::Config("Missing GEMINI_API_KEY environment variable".to_string()))?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| Error::Config(format!("Invalid PORT '{}'", raw)))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            gemini_api_key,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_port_defaults_to_4000() {
        let config = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "abc")])).unwrap();
        assert_eq!(config.gemini_api_key, "abc");
        assert_eq!(config.port, 4000);
    }

    #[test]
    fn test_explicit_port_is_used() {
        let config =
            Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "abc"), ("PORT", "8080")]))
                .unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "8080")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_empty_api_key_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "abc"), ("PORT", "http")]))
            .unwrap_err();
        assert!(err.to_string().contains("Invalid PORT"));
    }
}
