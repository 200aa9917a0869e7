//! Process configuration, read from the environment.

use thiserror::Error;

/// Seed the store with the sample data set (`true` by default).
pub const SEED_VAR: &str = "ASSETDESK_SEED";
/// Default tracing filter when `RUST_LOG` is unset.
pub const LOG_VAR: &str = "ASSETDESK_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: expected a boolean (true/false/1/0/yes/no), got {value:?}")]
    InvalidBool { var: &'static str, value: String },
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed_sample_data: bool,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source; unset or blank variables keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = non_blank(lookup(SEED_VAR)) {
            config.seed_sample_data = parse_bool(SEED_VAR, &raw)?;
        }
        if let Some(filter) = non_blank(lookup(LOG_VAR)) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.seed_sample_data);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn reads_seed_flag_and_filter() {
        let config = AppConfig::from_lookup(lookup(&[
            (SEED_VAR, "No"),
            (LOG_VAR, "assetdesk=debug"),
        ]))
        .unwrap();
        assert!(!config.seed_sample_data);
        assert_eq!(config.log_filter, "assetdesk=debug");
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = AppConfig::from_lookup(lookup(&[(SEED_VAR, "  "), (LOG_VAR, "")])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn rejects_unparseable_seed_flag() {
        let err = AppConfig::from_lookup(lookup(&[(SEED_VAR, "maybe")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBool {
                var: SEED_VAR,
                value: "maybe".to_string(),
            }
        );
    }
}
