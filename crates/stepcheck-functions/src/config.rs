//! Configuration for the Stepcheck functions
//!
//! Functions have no request-shaping settings; configuration only covers
//! how they log. Values are loaded from:
//! - Default values
//! - Runtime-provided variables (`AWS_LAMBDA_LOG_LEVEL`, `AWS_LAMBDA_LOG_FORMAT`)
//! - Function variables (`RUST_LOG`, `STEPCHECK_LOG_FORMAT`, `STEPCHECK_LOG_PII`)

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionConfig {
    /// Logging settings
    pub logging: LoggingConfig,
}

impl FunctionConfig {
    /// Load configuration from the process environment
    ///
    /// Also returns a warning for each variable whose value was rejected.
    pub fn from_env() -> (Self, Vec<String>) {
        let mut config = Self::default();
        let warnings = config.logging.merge_with_env();
        (config, warnings)
    }

    /// Whether personal data is masked in diagnostic lines
    pub fn redact_pii(&self) -> bool {
        self.logging.redact_pii
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogFormat;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "AWS_LAMBDA_LOG_LEVEL",
        "AWS_LAMBDA_LOG_FORMAT",
        "RUST_LOG",
        "STEPCHECK_LOG_FORMAT",
        "STEPCHECK_LOG_PII",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_without_overrides() {
        clear_env();
        let (config, warnings) = FunctionConfig::from_env();
        assert_eq!(config, FunctionConfig::default());
        assert!(config.redact_pii());
        assert!(warnings.is_empty());
    }

    #[test]
    #[serial]
    fn test_from_env_with_overrides() {
        clear_env();
        std::env::set_var("RUST_LOG", "debug");
        std::env::set_var("STEPCHECK_LOG_FORMAT", "compact");
        std::env::set_var("STEPCHECK_LOG_PII", "true");

        let (config, warnings) = FunctionConfig::from_env();
        clear_env();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Compact);
        assert!(!config.redact_pii());
        assert!(warnings.is_empty());
    }

    #[test]
    #[serial]
    fn test_from_env_reports_rejected_values() {
        clear_env();
        std::env::set_var("STEPCHECK_LOG_FORMAT", "xml");
        std::env::set_var("AWS_LAMBDA_LOG_FORMAT", "yaml");

        let (config, warnings) = FunctionConfig::from_env();
        clear_env();

        assert_eq!(config, FunctionConfig::default());
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("AWS_LAMBDA_LOG_FORMAT: yaml"));
        assert!(warnings[1].contains("STEPCHECK_LOG_FORMAT: xml"));
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: FunctionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FunctionConfig::default());
    }
}
