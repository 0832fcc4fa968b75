//! Error types for mss-health operations.
//!
//! This module defines [`MssError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Expected failure modes of a station (service down, stale data, empty
//!   command output) are reported as failed checks, not as errors
//! - Use `MssError` for conditions the caller has to deal with: bad
//!   configuration, an unreachable station, output that cannot be parsed
//! - Use `anyhow::Error` (via `MssError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for mss-health operations.
#[derive(Debug, Error)]
pub enum MssError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The remote session could not be established or was dropped.
    #[error("Connection to {target} failed: {message}")]
    Connection { target: String, message: String },

    /// A command finished with an unexpected exit status.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A program could not be started at all.
    #[error("Cannot run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Remote output did not have the expected shape.
    #[error("Cannot parse {what}: {message}")]
    Parse { what: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MssError {
    /// Shorthand for a [`MssError::Parse`] error.
    pub fn parse(what: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            what: what.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for mss-health operations.
pub type Result<T> = std::result::Result<T, MssError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = MssError::ConfigNotFound {
            path: PathBuf::from("/etc/mss-health/config.yml"),
        };
        assert!(err.to_string().contains("/etc/mss-health/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = MssError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = MssError::ConfigValidationError {
            message: "port must not be 0".into(),
        };
        assert!(err.to_string().contains("port must not be 0"));
    }

    #[test]
    fn connection_error_displays_target() {
        let err = MssError::Connection {
            target: "mss@station01".into(),
            message: "Connection refused".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("mss@station01"));
        assert!(msg.contains("Connection refused"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = MssError::CommandFailed {
            command: "ntpq -np".into(),
            code: Some(127),
        };
        let msg = err.to_string();
        assert!(msg.contains("ntpq -np"));
        assert!(msg.contains("127"));
    }

    #[test]
    fn spawn_error_keeps_io_cause() {
        let err = MssError::Spawn {
            program: "ssh".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(err.to_string(), "Cannot run ssh: permission denied");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn parse_helper_builds_parse_variant() {
        let err = MssError::parse("NTP peer line", "field 4 is not an integer");
        assert!(matches!(err, MssError::Parse { .. }));
        assert_eq!(
            err.to_string(),
            "Cannot parse NTP peer line: field 4 is not an integer"
        );
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: MssError = io_err.into();
        assert!(matches!(err, MssError::Io(_)));
    }
}
