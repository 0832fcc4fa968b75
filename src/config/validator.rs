//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - Connection user must be set and the port non-zero
//! - At least one recent data file and one log line are reported
//! - The data age limit must fit in a time span
//! - Remote paths must be absolute
//! - A minimum record version, if set, must not be blank

use crate::config::schema::MssConfig;
use crate::error::{MssError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &MssConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_connection(config));
    errors.extend(validate_checks(config));
    errors.extend(validate_paths(config));

    errors
}

fn validate_connection(config: &MssConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let conn = &config.connection;

    if conn.user.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-user",
            "connection.user must not be empty",
        ));
    }

    if conn.port == 0 {
        errors.push(ValidationError::new(
            "invalid-port",
            "connection.port must not be 0",
        ));
    }

    if let Some(host) = &conn.host {
        if host.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-host",
                "connection.host must not be empty when set",
            ));
        }
    }

    errors
}

fn validate_checks(config: &MssConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let checks = &config.checks;

    if checks.recent_files == 0 {
        errors.push(ValidationError::new(
            "invalid-recent-files",
            "checks.recent_files must be at least 1",
        ));
    }

    if checks.log_lines == 0 {
        errors.push(ValidationError::new(
            "invalid-log-lines",
            "checks.log_lines must be at least 1",
        ));
    }

    if checks.max_data_age().is_none() {
        errors.push(ValidationError::new(
            "invalid-max-data-age",
            format!(
                "checks.max_data_age_secs {} is out of range",
                checks.max_data_age_secs
            ),
        ));
    }

    if checks.datalink_process.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-datalink-process",
            "checks.datalink_process must not be empty",
        ));
    }

    if let Some(min) = &checks.min_record_version {
        if !min.chars().any(|c| c.is_ascii_digit()) {
            errors.push(ValidationError::new(
                "invalid-min-version",
                format!("checks.min_record_version '{}' has no numeric part", min),
            ));
        }
    }

    errors
}

fn validate_paths(config: &MssConfig) -> Vec<ValidationError> {
    let paths = &config.paths;
    let entries = [
        ("serial_file", &paths.serial_file),
        ("data_dir", &paths.data_dir),
        ("image_version_file", &paths.image_version_file),
        ("record_package_dir", &paths.record_package_dir),
        ("dali_config", &paths.dali_config),
        ("record_config", &paths.record_config),
        ("record_log", &paths.record_log),
    ];

    entries
        .iter()
        .filter(|(_, value)| !value.starts_with('/'))
        .map(|(name, value)| {
            ValidationError::new(
                "relative-path",
                format!("paths.{} must be absolute, got '{}'", name, value),
            )
        })
        .collect()
}

/// Validate a configuration, failing with all messages joined.
pub fn validate(config: &MssConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(MssError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&MssConfig::default()).is_ok());
    }

    #[test]
    fn rejects_zero_port() {
        let mut config = MssConfig::default();
        config.connection.port = 0;
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "invalid-port");
    }

    #[test]
    fn rejects_blank_user_and_host() {
        let mut config = MssConfig::default();
        config.connection.user = " ".to_string();
        config.connection.host = Some(String::new());
        let rules: Vec<_> = validate_config(&config)
            .into_iter()
            .map(|e| e.rule)
            .collect();
        assert!(rules.contains(&"empty-user".to_string()));
        assert!(rules.contains(&"empty-host".to_string()));
    }

    #[test]
    fn rejects_zero_recent_files() {
        let mut config = MssConfig::default();
        config.checks.recent_files = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn rejects_min_version_without_digits() {
        let mut config = MssConfig::default();
        config.checks.min_record_version = Some("latest".to_string());
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("latest"));
    }

    #[test]
    fn accepts_min_version() {
        let mut config = MssConfig::default();
        config.checks.min_record_version = Some("0.5.0".to_string());
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn rejects_relative_paths() {
        let mut config = MssConfig::default();
        config.paths.data_dir = "mseed".to_string();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("paths.data_dir"));
    }

    #[test]
    fn collects_all_errors() {
        let mut config = MssConfig::default();
        config.connection.port = 0;
        config.checks.log_lines = 0;
        config.paths.record_log = "log.txt".to_string();
        assert_eq!(validate_config(&config).len(), 3);
    }

    #[test]
    fn rejects_out_of_range_data_age() {
        let mut config = MssConfig::default();
        config.checks.max_data_age_secs = 10_000_000_000_000_000;
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "invalid-max-data-age");

        config.checks.max_data_age_secs = u64::MAX;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn accepts_large_data_age() {
        let mut config = MssConfig::default();
        config.checks.max_data_age_secs = 86_400 * 365;
        assert!(validate(&config).is_ok());
    }
}
