use crate::{FunnelError, FunnelResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_DATA_FILE: &str = "funnel.json";
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Data file used when no path is given on the command line
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    /// `tracing` filter directive, e.g. `info` or `funnel_persistence=debug`
    #[serde(default)]
    pub log_level: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/funnel/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("funnel/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("funnel\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the user config, falling back to defaults when it is missing or unreadable.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path).unwrap_or_else(|e| {
                tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> FunnelResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| FunnelError::Config(e.to_string()))
    }

    pub fn effective_data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }

    pub fn effective_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.effective_data_file(), PathBuf::from("funnel.json"));
        assert_eq!(config.effective_log_level(), "warn");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_file = \"/tmp/sales.json\"\nlog_level = \"debug\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(
            config.effective_data_file(),
            PathBuf::from("/tmp/sales.json")
        );
        assert_eq!(config.effective_log_level(), "debug");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log_level = \"info\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.effective_data_file(), PathBuf::from("funnel.json"));
    }

    #[test]
    fn test_invalid_config_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_file = [").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, FunnelError::Config(_)));
    }
}
