use crate::error::ConfigError;
use crate::model::RoutePath;
use crate::state::MAX_HISTORY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Per-section history configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HistoryConfig {
    /// Paths kept per section before the oldest are dropped
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

/// Session configuration for the desktop shell
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SessionConfig {
    /// User signed in at startup, if any
    #[serde(default)]
    pub username: Option<String>,
    /// Path the router starts on
    #[serde(default = "default_start_path")]
    pub start_path: String,
}

/// Logging configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_max_entries() -> usize {
    MAX_HISTORY
}

fn default_start_path() -> String {
    "/feed".to_string()
}

fn default_log_filter() -> String {
    "tabtrail=info".to_string()
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            username: None,
            start_path: default_start_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            history: HistoryConfig::default(),
            session: SessionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "tabtrail")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or return defaults if it is missing or bad
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "using default configuration");
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history.max_entries == 0 {
            return Err(ConfigError::InvalidHistoryCapacity);
        }
        if !RoutePath::parse(self.session.start_path.as_str()).is_resolved() {
            return Err(ConfigError::UnresolvedStartPath(self.session.start_path.clone()));
        }
        Ok(())
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<(), ConfigError> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                Config::default().save_to(&path)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.history.max_entries, 20);
        assert_eq!(config.session.username, None);
        assert_eq!(config.session.start_path, "/feed");
        assert_eq!(config.logging.filter, "tabtrail=info");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: Config = toml::from_str("").expect("parse");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[session]\nusername = \"bob\"\n").expect("parse");
        assert_eq!(config.session.username.as_deref(), Some("bob"));
        assert_eq!(config.session.start_path, "/feed");
        assert_eq!(config.history.max_entries, 20);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.history.max_entries = 5;
        config.session.username = Some("carol".to_string());
        config.save_to(&path).expect("save");

        assert_eq!(Config::load_from(&path).expect("load"), config);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[history]\nmax_entries = 0\n").expect("write");

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidHistoryCapacity)
        ));
    }

    #[test]
    fn test_template_start_path_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[session]\nstart_path = \"/map/[region]\"\n").expect("write");

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::UnresolvedStartPath(p)) if p == "/map/[region]"
        ));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "history = [").expect("write");

        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));
    }
}
