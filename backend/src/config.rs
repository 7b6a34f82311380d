//! Runtime configuration read from `LEARNING_TRACKER_*` environment variables.

use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};

use crate::storage::sqlite::connection::DEFAULT_DATABASE_URL;

pub const DATABASE_URL_VAR: &str = "LEARNING_TRACKER_DATABASE_URL";
pub const BIND_ADDR_VAR: &str = "LEARNING_TRACKER_BIND_ADDR";
pub const CORS_ORIGIN_VAR: &str = "LEARNING_TRACKER_CORS_ORIGIN";
pub const SEED_CATALOG_VAR: &str = "LEARNING_TRACKER_SEED_CATALOG";
pub const LOG_LEVEL_VAR: &str = "LEARNING_TRACKER_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Origin allowed to call the API from a browser
    pub cors_origin: String,
    /// Import the starter catalog when the task store is empty
    pub seed_catalog: bool,
    /// Default log filter, used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            cors_origin: "http://localhost:8080".to_string(),
            seed_catalog: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Unset or blank
    /// variables keep their defaults; malformed ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();

        if let Some(url) = get(DATABASE_URL_VAR) {
            config.database_url = url;
        }
        if let Some(addr) = get(BIND_ADDR_VAR) {
            config.bind_addr = addr
                .parse()
                .with_context(|| format!("{} is not a socket address: {}", BIND_ADDR_VAR, addr))?;
        }
        if let Some(origin) = get(CORS_ORIGIN_VAR) {
            config.cors_origin = origin;
        }
        if let Some(seed) = get(SEED_CATALOG_VAR) {
            config.seed_catalog = parse_flag(&seed)
                .ok_or_else(|| anyhow!("{} must be true or false, got: {}", SEED_CATALOG_VAR, seed))?;
        }
        if let Some(level) = get(LOG_LEVEL_VAR) {
            config.log_level = level;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
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
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.database_url, "sqlite:learning_tracker.db");
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert!(config.seed_catalog);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (DATABASE_URL_VAR, "sqlite::memory:"),
            (BIND_ADDR_VAR, "0.0.0.0:8088"),
            (CORS_ORIGIN_VAR, "http://tracker.local"),
            (SEED_CATALOG_VAR, "no"),
            (LOG_LEVEL_VAR, "debug"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_addr.port(), 8088);
        assert_eq!(config.cors_origin, "http://tracker.local");
        assert!(!config.seed_catalog);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = AppConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "  ")])).unwrap();

        assert_eq!(config.bind_addr, AppConfig::default().bind_addr);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(AppConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "localhost")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[(SEED_CATALOG_VAR, "maybe")])).is_err());
    }
}
