//! Application configuration loaded from environment variables.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Telephony integration configuration
    #[serde(default)]
    pub telephony: TelephonyConfig,

    /// Shell configuration
    #[serde(default)]
    pub shell: ShellConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelephonyConfig {
    /// Whether the telephony integration is wired up at startup
    #[serde(default)]
    pub enabled: bool,

    /// Name of the desk line calls are bridged to
    #[serde(default = "default_line")]
    pub line: String,

    /// How long the bridge waits for the line to pick up
    #[serde(default = "default_dial_timeout", with = "humantime_serde")]
    pub dial_timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShellConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TelephonyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            line: default_line(),
            dial_timeout: default_dial_timeout(),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_line() -> String {
    "desk-1".into()
}

fn default_dial_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    // Note: try_parsing(true) would turn a value like
                    // +2001 into a positive number, stripping the prefix.
                    // Keep strings as strings.
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(!config.telephony.enabled);
        assert_eq!(config.telephony.line, "desk-1");
        assert_eq!(config.telephony.dial_timeout, Duration::from_secs(30));
        assert_eq!(config.shell.log_level, "info");
    }

    #[test]
    fn test_dial_timeout_parses_humantime() {
        let config: Config =
            serde_json::from_str(r#"{"telephony": {"dial_timeout": "5s"}}"#).unwrap();
        assert_eq!(config.telephony.dial_timeout, Duration::from_secs(5));
    }
}
