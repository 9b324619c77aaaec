//! Application configuration.
//!
//! The defaults are an embedded TOML document. A full or partial override can
//! be baked in at build time through the `PKWT_CONFIG` environment variable;
//! a broken override is logged and ignored.

use leptos::prelude::use_context;
use serde::Deserialize;

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
request_timeout_ms = 30000

[list]
default_page_size = 10
page_size_options = [10, 25, 50, 100]
search_debounce_ms = 300

[notifications]
refresh_interval_secs = 600

[logging]
level = "debug"
"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub list: ListConfig,
    pub notifications: NotificationsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Empty means "same host as the page, port 3000".
    pub base_url: String,
    /// 0 disables the timeout.
    pub request_timeout_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub default_page_size: u32,
    pub page_size_options: Vec<u32>,
    pub search_debounce_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    pub refresh_interval_secs: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            request_timeout_ms: 30_000,
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            page_size_options: vec![10, 25, 50, 100],
            search_debounce_ms: 300,
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 600,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            list: ListConfig::default(),
            notifications: NotificationsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Embedded defaults merged with the build-time override, if any.
    pub fn load() -> Self {
        Self::from_sources(option_env!("PKWT_CONFIG"))
    }

    fn from_sources(override_toml: Option<&str>) -> Self {
        let base = toml::from_str::<AppConfig>(DEFAULT_CONFIG).unwrap_or_default();
        match override_toml {
            Some(raw) if !raw.trim().is_empty() => match toml::from_str::<AppConfig>(raw) {
                Ok(cfg) => cfg,
                Err(e) => {
                    log::warn!("Ignoring invalid PKWT_CONFIG override: {}", e);
                    base
                }
            },
            _ => base,
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.logging
            .level
            .parse::<log::Level>()
            .unwrap_or(log::Level::Info)
    }

    pub fn page_size(&self) -> u32 {
        self.list.default_page_size.max(1)
    }

    pub fn refresh_interval_ms(&self) -> u32 {
        self.notifications
            .refresh_interval_secs
            .max(1)
            .saturating_mul(1000)
    }
}

/// Config provided by `App`; defaults outside the component tree.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<AppConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.refresh_interval_ms(), 600_000);
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = AppConfig::from_sources(Some(
            "[api]\nbase_url = \"https://pkwt.example.go.id\"\n[list]\ndefault_page_size = 25\n",
        ));
        assert_eq!(config.api.base_url, "https://pkwt.example.go.id");
        assert_eq!(config.api.request_timeout_ms, 30_000);
        assert_eq!(config.page_size(), 25);
        assert_eq!(config.list.search_debounce_ms, 300);
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let config = AppConfig::from_sources(Some("[api\nbroken"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_unknown_level_defaults_to_info() {
        let mut config = AppConfig::default();
        config.logging.level = "chatty".into();
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
