//! Configuration loading, parsing, and validation for mss-health.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery, loading and CLI overrides in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use mss_health::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yml");
//! fs::write(&path, "connection:\n  host: station01\n").unwrap();
//!
//! let config = load_config(Some(&path)).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.connection.host, Some("station01".to_string()));
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{load_config, load_config_file, parse_config, ConfigPaths, ConnectionOverrides};
pub use schema::{CheckSettings, ConnectionSettings, MssConfig, StationPaths};
pub use validator::{validate, validate_config, ValidationError};
