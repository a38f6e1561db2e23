//! Application configuration

use crate::utils::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Backend address used by the development proxy of the web client
pub const DEFAULT_SERVER_URL: &str = "http://localhost:7777";

const SETTINGS_FILE: &str = "settings.json";

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Base URL of the download backend
    pub server_url: String,

    /// Timeout for metadata requests (seconds)
    pub request_timeout_secs: u64,

    /// Number of skeleton blocks shown while a search is running
    pub placeholder_count: usize,

    /// Open download links in the system browser
    pub open_in_browser: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            request_timeout_secs: 30,
            placeholder_count: 4,
            open_in_browser: true,
        }
    }
}

impl AppSettings {
    /// Parsed backend base URL
    pub fn server(&self) -> Result<Url, AppError> {
        let url = Url::parse(self.server_url.trim())?;
        if url.cannot_be_a_base() {
            return Err(AppError::InvalidServerUrl(self.server_url.clone()));
        }
        Ok(url)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Clamp values edited by hand or through the settings view
    pub fn sanitized(mut self) -> Self {
        if self.request_timeout_secs == 0 {
            self.request_timeout_secs = 1;
        }
        if self.placeholder_count == 0 {
            self.placeholder_count = 1;
        }
        self.server_url = self.server_url.trim().trim_end_matches('/').to_string();
        self
    }

    /// Load settings from `path`, falling back to defaults when the file is missing
    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let settings: AppSettings = serde_json::from_str(&raw)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(settings.sanitized())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    /// Load from the per-user config directory; a broken file is logged and ignored
    pub fn load() -> Self {
        match Self::load_from(&settings_path()) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings, using defaults: {}", e);
                Self::default()
            }
        }
    }
}

/// Location of the settings file
pub fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytb-downloader")
        .join(SETTINGS_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppSettings::default();
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
        assert!(config.placeholder_count > 0);
        assert!(config.request_timeout_secs > 0);
        assert!(config.server().is_ok());
    }

    #[test]
    fn test_sanitized_enforces_minimums() {
        let config = AppSettings {
            server_url: " http://example.com/ ".to_string(),
            request_timeout_secs: 0,
            placeholder_count: 0,
            open_in_browser: false,
        }
        .sanitized();

        assert_eq!(config.server_url, "http://example.com");
        assert_eq!(config.request_timeout_secs, 1);
        assert_eq!(config.placeholder_count, 1);
    }

    #[test]
    fn test_rejects_non_base_server() {
        let config = AppSettings {
            server_url: "mailto:someone@example.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.server(), Err(AppError::InvalidServerUrl(_))));

        let config = AppSettings {
            server_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(config.server().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join(SETTINGS_FILE);

        let settings = AppSettings {
            server_url: "http://10.0.0.2:8080".to_string(),
            placeholder_count: 2,
            ..Default::default()
        };
        settings.save_to(&path).expect("save");

        let loaded = AppSettings::load_from(&path).expect("load");
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let loaded = AppSettings::load_from(&dir.path().join("absent.json")).expect("load");
        assert_eq!(loaded, AppSettings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, r#"{"placeholder_count": 6}"#).expect("write");

        let loaded = AppSettings::load_from(&path).expect("load");
        assert_eq!(loaded.placeholder_count, 6);
        assert_eq!(loaded.server_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_broken_file_is_config_error() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "{ not json").expect("write");

        assert!(matches!(
            AppSettings::load_from(&path),
            Err(AppError::Config(_))
        ));
    }
}
