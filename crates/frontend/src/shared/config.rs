//! Application configuration.
//!
//! The version string is fixed at build time through `WEATHERDUMP_VERSION`.
//! The log level can be overridden per page load with `?log_level=<level>`.

use serde::Deserialize;
use web_sys::window;

pub const DEFAULT_VERSION: &str = "Dev-Mode";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub version: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: build_version().to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct QueryOverrides {
    log_level: Option<String>,
}

impl AppConfig {
    /// Reads overrides from the current page URL.
    pub fn load() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }

    /// Builds a config from a raw query string, with or without the leading `?`.
    pub fn from_query(query: &str) -> Self {
        let overrides: QueryOverrides =
            serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_default();

        let mut config = Self::default();
        if let Some(raw) = overrides.log_level {
            match raw.trim().parse::<log::Level>() {
                Ok(level) => config.log_level = level,
                Err(_) => log::warn!("ignoring unknown log_level '{}'", raw),
            }
        }
        config
    }
}

fn build_version() -> &'static str {
    option_env!("WEATHERDUMP_VERSION")
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_query() {
        let config = AppConfig::from_query("");
        assert_eq!(config.log_level, log::Level::Debug);
        assert_eq!(config.version, build_version());
    }

    #[test]
    fn test_log_level_override() {
        assert_eq!(
            AppConfig::from_query("?log_level=warn").log_level,
            log::Level::Warn
        );
        assert_eq!(
            AppConfig::from_query("log_level=INFO").log_level,
            log::Level::Info
        );
    }

    #[test]
    fn test_invalid_and_unrelated_keys() {
        assert_eq!(
            AppConfig::from_query("?log_level=loud").log_level,
            log::Level::Debug
        );
        assert_eq!(
            AppConfig::from_query("?active=updates&foo=bar").log_level,
            log::Level::Debug
        );
    }
}
