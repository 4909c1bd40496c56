//! Configuration loading.

use serde::Deserialize;
use std::path::Path;
use steam_social_proto::ClientPersonaStateFlags;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dispatcher behaviour.
    pub social: SocialConfig,
    /// Log output.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Dispatcher behaviour.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    /// Persona fields requested for every friend after a full friends list,
    /// written as `"PLAYER_NAME | PRESENCE"`.
    pub snapshot_info_flags: ClientPersonaStateFlags,
    /// Request the local account's own persona once account info arrives.
    pub request_own_persona: bool,
    /// Persona fields requested for the local account.
    pub own_persona_flags: ClientPersonaStateFlags,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            snapshot_info_flags: ClientPersonaStateFlags::DEFAULT_INFO_REQUEST,
            request_own_persona: true,
            own_persona_flags: ClientPersonaStateFlags::OWN_INFO_REQUEST,
        }
    }
}

/// Log output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}
