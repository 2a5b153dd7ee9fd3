//! Configuration loading for the zoo simulation.
//!
//! The optional `zoo-config.yaml` file controls logging and the runtime
//! reconfiguration step of the demonstration. The roster itself is fixed in
//! source (see [`crate::roster`]).

use std::path::Path;

use serde::Deserialize;
use zoo_types::SleepBehaviorKind;

/// Environment variable that overrides `logging.level`.
pub const LOG_LEVEL_ENV: &str = "ZOO_LOG_LEVEL";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level zoo configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ZooConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Demonstration run settings.
    #[serde(default)]
    pub demo: DemoConfig,
}

impl ZooConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `ZOO_LOG_LEVEL` overrides `logging.level` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.logging.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit logs as JSON lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Override the level with `ZOO_LOG_LEVEL` when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(LOG_LEVEL_ENV) {
            self.level = val;
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Demonstration run settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DemoConfig {
    /// Sleep behavior to swap onto the reconfigured cat after the daily
    /// routine, followed by a second shut-down. `null` skips the step.
    #[serde(default = "default_reassign_after_routine")]
    pub reassign_after_routine: Option<SleepBehaviorKind>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            reassign_after_routine: default_reassign_after_routine(),
        }
    }
}

fn default_log_level() -> String {
    String::from("info")
}

const fn default_reassign_after_routine() -> Option<SleepBehaviorKind> {
    Some(SleepBehaviorKind::Run)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_uses_defaults() {
        let config = ZooConfig::parse("{}").unwrap();
        assert_eq!(config, ZooConfig::default());
        assert_eq!(config.logging.level, "info");
        assert_eq!(
            config.demo.reassign_after_routine,
            Some(SleepBehaviorKind::Run)
        );
    }

    #[test]
    fn partial_yaml_overrides() {
        let yaml = "
logging:
  level: debug
  json: true
demo:
  reassign_after_routine: Doze
";
        let config = ZooConfig::parse(yaml).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        assert_eq!(
            config.demo.reassign_after_routine,
            Some(SleepBehaviorKind::Doze)
        );
    }

    #[test]
    fn null_disables_reassignment() {
        let config = ZooConfig::parse("demo:\n  reassign_after_routine: null\n").unwrap();
        assert_eq!(config.demo.reassign_after_routine, None);
    }

    #[test]
    fn unknown_behavior_is_rejected() {
        let result = ZooConfig::parse("demo:\n  reassign_after_routine: Purr\n");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = ZooConfig::from_file(Path::new("does-not-exist/zoo-config.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
