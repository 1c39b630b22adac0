//! Service configuration
//!
//! Plain values that can be loaded from JSON or assembled through
//! [`UlogBuilder`](crate::UlogBuilder).

use super::error::{Result, UlogError};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Scratch buffer size used when a manager is created implicitly
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// How long a log manager lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecyclePolicy {
    /// Lives from `initialize` (or first `register`) until `teardown`
    Explicit,

    /// Also torn down when the last module unregisters
    #[default]
    ReferenceCounted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UlogConfig {
    /// Scratch buffer size for implicitly created managers
    pub buffer_size: usize,

    pub lifecycle: LifecyclePolicy,

    /// Level given to newly registered modules
    pub default_level: LogLevel,

    /// Maximum number of modules registered at once
    pub max_modules: Option<usize>,
}

impl Default for UlogConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            lifecycle: LifecyclePolicy::default(),
            default_level: LogLevel::default(),
            max_modules: None,
        }
    }
}

impl UlogConfig {
    pub fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 {
            return Err(UlogError::config("UlogConfig", "buffer_size must be > 0"));
        }
        if self.max_modules == Some(0) {
            return Err(UlogError::config(
                "UlogConfig",
                "max_modules must be > 0 when set",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON document; missing keys take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UlogConfig::default();
        assert_eq!(config.buffer_size, 1024);
        assert_eq!(config.lifecycle, LifecyclePolicy::ReferenceCounted);
        assert_eq!(config.default_level, LogLevel::Warning);
        assert_eq!(config.max_modules, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config =
            UlogConfig::from_json_str(r#"{"buffer_size": 256, "lifecycle": "explicit"}"#)
                .unwrap();
        assert_eq!(config.buffer_size, 256);
        assert_eq!(config.lifecycle, LifecyclePolicy::Explicit);
        assert_eq!(config.default_level, LogLevel::Warning);
    }

    #[test]
    fn test_full_json() {
        let config = UlogConfig::from_json_str(
            r#"{"buffer_size": 64, "lifecycle": "reference_counted",
                "default_level": "DEBUG", "max_modules": 8}"#,
        )
        .unwrap();
        assert_eq!(config.default_level, LogLevel::Debug);
        assert_eq!(config.max_modules, Some(8));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            UlogConfig::from_json_str(r#"{"buffer_size": 0}"#),
            Err(UlogError::InvalidConfiguration { .. })
        ));
        assert!(UlogConfig::from_json_str(r#"{"max_modules": 0}"#).is_err());
        assert!(matches!(
            UlogConfig::from_json_str("{ not json"),
            Err(UlogError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            UlogConfig::from_json_file("/nonexistent/ulog.json"),
            Err(UlogError::Io(_))
        ));
    }
}
