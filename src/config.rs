use crate::error::AppError;
use crate::filesystem;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Runtime settings, read from `smarttracker.toml` in the app data directory.
///
/// Every field has a built-in default, so a partial file only overrides the
/// keys it names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Sync endpoint (placeholder REST API)
    pub api_url: String,
    /// Reverse geocoding endpoint
    pub geocode_url: String,
    /// `userId` sent with every sync payload
    pub user_id: u32,
    /// Number of newest activities mirrored into the offline cache
    pub max_offline: usize,
    /// Simulated delay before a mock location is delivered
    pub mock_location_delay_ms: u64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "https://jsonplaceholder.typicode.com/posts".to_string(),
            geocode_url: "https://nominatim.openstreetmap.org/reverse".to_string(),
            user_id: 1,
            max_offline: 5,
            mock_location_delay_ms: 1000,
            request_timeout_secs: 15,
            user_agent: "SmartTracker/0.1.0".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_toml(s: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads the config at `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }
}

/// Loads the app configuration, falling back to defaults on any error
pub fn load_config() -> AppConfig {
    let path = filesystem::get_config_path();
    match AppConfig::load_from(&path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring config at {}: {}", path.display(), e);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = AppConfig::from_toml("max_offline = 3\nuser_id = 7\n").unwrap();
        assert_eq!(config.max_offline, 3);
        assert_eq!(config.user_id, 7);
        assert_eq!(config.api_url, AppConfig::default().api_url);
        assert_eq!(config.mock_location_delay_ms, 1000);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let err = AppConfig::from_toml("max_offline = \"five\"").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("smarttracker-missing-config.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(AppConfig::load_from(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_written_config_is_read_back() {
        let mut config = AppConfig::default();
        config.api_url = "http://localhost:8080/posts".to_string();
        let path = std::env::temp_dir().join(format!(
            "smarttracker-config-{}.toml",
            uuid::Uuid::new_v4()
        ));
        std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
