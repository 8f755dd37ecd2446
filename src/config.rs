//! Configuration management for MovieTUI
//!
//! Handles config file loading/saving and endpoint resolution.
//! Config is stored at ~/.config/movietui/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::DEFAULT_MOVIES_URL;

/// Environment variable overriding the catalog endpoint
pub const API_URL_ENV: &str = "MOVIETUI_API_URL";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Catalog endpoint
    pub api_url: Option<String>,
    /// Overall request timeout; unset means the transport default
    pub request_timeout_secs: Option<u64>,
    /// Where TUI mode writes its log
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Get config file path (~/.config/movietui/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("movietui").join("config.toml"))
    }

    /// Load config from the default location, or defaults if not found
    pub fn load() -> Self {
        Self::path()
            .map(|p| Self::load_from(&p))
            .unwrap_or_default()
    }

    /// Load config from `path`, or defaults if missing or unreadable
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Catalog endpoint with fallback chain:
    /// 1. Explicit override (command-line flag)
    /// 2. Environment variable MOVIETUI_API_URL
    /// 3. Config file
    /// 4. Built-in default
    pub fn resolve_api_url(&self, flag: Option<&str>) -> String {
        if let Some(url) = flag {
            return url.to_string();
        }

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                return url;
            }
        }

        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_MOVIES_URL.to_string())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_url.is_none());
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_flag_wins() {
        let config = Config {
            api_url: Some("http://from-config".into()),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_api_url(Some("http://from-flag")),
            "http://from-flag"
        );
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            api_url: Some("http://localhost:9000/movies".into()),
            request_timeout_secs: Some(15),
            log_file: Some(PathBuf::from("/tmp/movietui.log")),
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path), config);
    }

    #[test]
    fn test_unreadable_config_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_url = [not toml").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
        assert_eq!(Config::load_from(&dir.path().join("missing.toml")), Config::default());
    }
}
