//! Configuration loading for the Riposte TUI.
//!
//! A TOML file may be passed via `--config <path>` or `RIPOSTE_TUI_CONFIG`.
//! Without one, built-in defaults point at a local service instance.

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct TuiConfig {
    /// Base URL of the objection catalog service, without the `/api` prefix.
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    pub tick_interval_ms: u64,
    /// Items revealed per "load more" step.
    pub page_size: usize,
    pub log_path: PathBuf,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_ms: 5_000,
            tick_interval_ms: 250,
            page_size: riposte_core::DEFAULT_PAGE_SIZE,
            log_path: PathBuf::from("riposte-tui.log"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl TuiConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config = match config_path_from_args().or_else(config_path_from_env) {
            Some(path) => Self::from_path(&path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: TuiConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_interval_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "page_size",
                reason: "must be > 0".to_string(),
            });
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_path",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("RIPOSTE_TUI_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(TuiConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let config = TuiConfig {
            page_size: 0,
            ..TuiConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "page_size", .. })
        ));
    }

    #[test]
    fn test_rejects_empty_base_url() {
        let config = TuiConfig {
            api_base_url: "  ".to_string(),
            ..TuiConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_path_parses_partial_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("riposte.toml");
        std::fs::write(&path, "api_base_url = \"http://svc:9000\"\npage_size = 25\n").unwrap();

        let config = TuiConfig::from_path(&path).unwrap();
        assert_eq!(config.api_base_url, "http://svc:9000");
        assert_eq!(config.page_size, 25);
        // Unspecified fields fall back to defaults.
        assert_eq!(config.request_timeout_ms, TuiConfig::default().request_timeout_ms);
    }

    #[test]
    fn test_from_path_rejects_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("riposte.toml");
        std::fs::write(&path, "api_base_urll = \"typo\"\n").unwrap();

        assert!(TuiConfig::from_path(&path).is_err());
    }
}
