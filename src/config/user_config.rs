//! User-level configuration for qrsafe
//!
//! Supports loading config from:
//! - Environment variables
//! - ~/.config/qrsafe/config.toml
//!
//! Only probe and output behavior is configurable. The rule tables are
//! fixed constants and have no config surface.

use crate::probe::{default_user_agent, ProbeConfig, DEFAULT_GET_TIMEOUT, DEFAULT_HEAD_TIMEOUT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

pub const ENV_NO_PROBE: &str = "QRSAFE_NO_PROBE";
pub const ENV_USER_AGENT: &str = "QRSAFE_USER_AGENT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct UserConfig {
    #[serde(default)]
    pub probe: ProbeSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ProbeSettings {
    /// Set to false to never touch the network
    pub enabled: Option<bool>,

    /// HEAD timeout in seconds (default: 5)
    pub head_timeout_secs: Option<u64>,

    /// GET fallback timeout in seconds (default: 6)
    pub get_timeout_secs: Option<u64>,

    /// User-Agent header sent with probe requests
    pub user_agent: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct OutputSettings {
    /// Default output format: text, json, report
    pub format: Option<String>,
}

/// Truthy unless empty, "0" or "false"
fn env_flag(value: &str) -> bool {
    let v = value.trim();
    !(v.is_empty() || v == "0" || v.eq_ignore_ascii_case("false"))
}

impl UserConfig {
    /// Load config from all sources, with priority:
    /// 1. Environment variables (highest)
    /// 2. User config (~/.config/qrsafe/config.toml)
    ///
    /// A missing or broken config file is not fatal; defaults are used.
    pub fn load() -> Self {
        let mut config = UserConfig::default();

        if let Some(path) = Self::user_config_path().filter(|p| p.exists()) {
            match Self::from_file(&path) {
                Ok(file_config) => config.merge(file_config),
                Err(e) => warn!("{e}; using defaults"),
            }
        }

        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("qrsafe").join("config.toml"))
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup(ENV_NO_PROBE) {
            if env_flag(&v) {
                self.probe.enabled = Some(false);
            }
        }
        if let Some(ua) = lookup(ENV_USER_AGENT).filter(|v| !v.trim().is_empty()) {
            self.probe.user_agent = Some(ua);
        }
    }

    /// Merge another config into this one (other takes priority)
    fn merge(&mut self, other: UserConfig) {
        if other.probe.enabled.is_some() {
            self.probe.enabled = other.probe.enabled;
        }
        if other.probe.head_timeout_secs.is_some() {
            self.probe.head_timeout_secs = other.probe.head_timeout_secs;
        }
        if other.probe.get_timeout_secs.is_some() {
            self.probe.get_timeout_secs = other.probe.get_timeout_secs;
        }
        if other.probe.user_agent.is_some() {
            self.probe.user_agent = other.probe.user_agent;
        }
        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
    }

    pub fn probe_enabled(&self) -> bool {
        self.probe.enabled.unwrap_or(true)
    }

    pub fn output_format(&self) -> &str {
        self.output.format.as_deref().unwrap_or("text")
    }

    /// Probe settings with defaults filled in
    pub fn probe_config(&self) -> ProbeConfig {
        ProbeConfig {
            head_timeout: self
                .probe
                .head_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_HEAD_TIMEOUT),
            get_timeout: self
                .probe
                .get_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_GET_TIMEOUT),
            user_agent: self
                .probe
                .user_agent
                .clone()
                .unwrap_or_else(default_user_agent),
        }
    }

    /// Create the user config file with commented defaults if it is missing.
    /// Returns the path and whether it was newly created.
    pub fn init_user_config() -> Result<(PathBuf, bool), ConfigError> {
        let config_path = Self::user_config_path().ok_or(ConfigError::NoConfigDir)?;
        let created = Self::write_example(&config_path)?;
        Ok((config_path, created))
    }

    fn write_example(config_path: &Path) -> Result<bool, ConfigError> {
        if config_path.exists() {
            return Ok(false);
        }
        let io_err = |source| ConfigError::Read {
            path: config_path.to_path_buf(),
            source,
        };
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let example = r#"# qrsafe User Configuration

[probe]
# Set to false to skip the live reachability check entirely
# enabled = true

# head_timeout_secs = 5
# get_timeout_secs = 6
# user_agent = "Mozilla/5.0 (compatible; qrsafe)"

[output]
# Default output format: text, json, report
# format = "text"
"#;
        std::fs::write(config_path, example).map_err(io_err)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = UserConfig::default();
        assert!(config.probe_enabled());
        assert_eq!(config.output_format(), "text");
        let probe = config.probe_config();
        assert_eq!(probe.head_timeout, Duration::from_secs(5));
        assert_eq!(probe.get_timeout, Duration::from_secs(6));
        assert!(probe.user_agent.contains("qrsafe"));
    }

    #[test]
    fn test_toml_parsing() {
        let toml_str = r#"
[probe]
enabled = false
head_timeout_secs = 2
user_agent = "test-agent"

[output]
format = "json"
"#;
        let config: UserConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.probe_enabled());
        assert_eq!(config.output_format(), "json");
        let probe = config.probe_config();
        assert_eq!(probe.head_timeout, Duration::from_secs(2));
        assert_eq!(probe.get_timeout, Duration::from_secs(6));
        assert_eq!(probe.user_agent, "test-agent");
    }

    #[test]
    fn test_toml_parsing_minimal() {
        let config: UserConfig = toml::from_str("").unwrap();
        assert!(config.probe_enabled());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is [[ not valid toml {{{}}}").unwrap();
        let err = UserConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> =
            HashMap::from([(ENV_NO_PROBE, "1"), (ENV_USER_AGENT, "env-agent")]);
        let mut config = UserConfig::default();
        config.apply_env(|k| env.get(k).map(|v| v.to_string()));
        assert!(!config.probe_enabled());
        assert_eq!(config.probe_config().user_agent, "env-agent");
    }

    #[test]
    fn test_env_flag_falsy_values() {
        assert!(!env_flag(""));
        assert!(!env_flag("0"));
        assert!(!env_flag("FALSE"));
        assert!(env_flag("1"));
        assert!(env_flag("yes"));
    }

    #[test]
    fn test_merge_overrides_set_fields() {
        let mut base = UserConfig::default();
        base.probe.get_timeout_secs = Some(9);
        let other = UserConfig {
            probe: ProbeSettings {
                enabled: Some(false),
                head_timeout_secs: Some(1),
                get_timeout_secs: None,
                user_agent: None,
            },
            output: OutputSettings {
                format: Some("report".into()),
            },
        };
        base.merge(other);
        assert!(!base.probe_enabled());
        assert_eq!(base.probe.head_timeout_secs, Some(1));
        assert_eq!(base.probe.get_timeout_secs, Some(9));
        assert_eq!(base.output_format(), "report");
    }

    #[test]
    fn test_write_example_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        assert!(UserConfig::write_example(&path).unwrap());
        assert!(!UserConfig::write_example(&path).unwrap());
        // The example must itself be valid config
        let config = UserConfig::from_file(&path).unwrap();
        assert!(config.probe_enabled());
    }
}
