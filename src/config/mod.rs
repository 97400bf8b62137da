//! Configuration module for qrsafe
//!
//! This module handles:
//! - User-level configuration (~/.config/qrsafe/config.toml)
//! - Environment overrides
//! - Probe defaults

mod user_config;

pub use user_config::{
    ConfigError, OutputSettings, ProbeSettings, UserConfig, ENV_NO_PROBE, ENV_USER_AGENT,
};
