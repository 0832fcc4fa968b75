//! Configuration file discovery and loading.
//!
//! This module handles finding the configuration file and applying
//! command-line overrides on top of it.

use crate::config::schema::MssConfig;
use crate::error::{MssError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Candidate configuration files.
///
/// Lookup order:
/// 1. File given with `--config`
/// 2. User config (`<config_dir>/mss-health/config.yml`)
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// Explicitly requested config file
    pub explicit: Option<PathBuf>,

    /// User's config: ~/.config/mss-health/config.yml on Linux
    pub user: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files, preferring an explicit path.
    pub fn discover(explicit: Option<&Path>) -> Self {
        Self {
            explicit: explicit.map(Path::to_path_buf),
            user: Self::find_user_config(),
        }
    }

    /// Find the user config, if it exists.
    fn find_user_config() -> Option<PathBuf> {
        let path = dirs::config_dir()?.join("mss-health").join("config.yml");
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }

    /// The file that will be loaded, if any.
    pub fn active(&self) -> Option<&PathBuf> {
        self.explicit.as_ref().or(self.user.as_ref())
    }
}

/// Load and parse a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<MssConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            MssError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            MssError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into MssConfig.
///
/// An empty document yields the default configuration.
pub fn parse_config(content: &str, source_path: &Path) -> Result<MssConfig> {
    if content.trim().is_empty() {
        return Ok(MssConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| MssError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the configuration.
///
/// An explicit path must exist. Without one, the user config is used when
/// present and built-in defaults otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<MssConfig> {
    let paths = ConfigPaths::discover(explicit);

    match paths.active() {
        Some(path) => {
            tracing::debug!("Loading configuration from {}", path.display());
            load_config_file(path)
        }
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(MssConfig::default())
        }
    }
}

/// Connection values given on the command line.
///
/// Set values replace the corresponding configuration values.
#[derive(Debug, Clone, Default)]
pub struct ConnectionOverrides {
    pub host: Option<String>,
    pub user: Option<String>,
    pub port: Option<u16>,
    pub identity_file: Option<PathBuf>,
}

impl ConnectionOverrides {
    /// Apply the overrides to a configuration.
    pub fn apply(&self, config: &mut MssConfig) {
        if let Some(host) = &self.host {
            config.connection.host = Some(host.clone());
        }
        if let Some(user) = &self.user {
            config.connection.user = user.clone();
        }
        if let Some(port) = self.port {
            config.connection.port = port;
        }
        if let Some(identity) = &self.identity_file {
            config.connection.identity_file = Some(identity.clone());
        }
    }
}
