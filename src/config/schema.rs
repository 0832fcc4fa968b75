//! Configuration schema definitions for mss-health.
//!
//! This module contains all the struct definitions that map to
//! the YAML configuration file format. Every field has a default that
//! matches the standard MSS station layout, so an empty file (or no file
//! at all) is a valid configuration.

use chrono::TimeDelta;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for config.yml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MssConfig {
    /// How to reach the station
    pub connection: ConnectionSettings,

    /// Thresholds and names used by the checks
    pub checks: CheckSettings,

    /// File system layout of the station
    pub paths: StationPaths,
}

/// SSH connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ConnectionSettings {
    /// Station host name or address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Login user on the station
    #[serde(default = "default_user")]
    pub user: String,

    /// SSH port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Private key passed to `ssh -i`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_file: Option<PathBuf>,

    /// Seconds to wait for the SSH connection to come up
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// Extra `-o` options for ssh (e.g. `StrictHostKeyChecking=accept-new`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_options: Vec<String>,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            host: None,
            user: default_user(),
            port: default_port(),
            identity_file: None,
            connect_timeout: default_connect_timeout(),
            ssh_options: Vec::new(),
        }
    }
}

fn default_user() -> String {
    "mss".to_string()
}

fn default_port() -> u16 {
    22
}

fn default_connect_timeout() -> u64 {
    10
}

/// Check thresholds and expected names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CheckSettings {
    /// Datalink server that the station forwards data to
    #[serde(default = "default_datalink_host")]
    pub datalink_host: String,

    /// Remote port of the datalink connection
    #[serde(default = "default_datalink_port")]
    pub datalink_port: u16,

    /// Process that owns the datalink connection
    #[serde(default = "default_datalink_process")]
    pub datalink_process: String,

    /// Largest acceptable send queue on the datalink socket
    #[serde(default = "default_max_send_queue")]
    pub max_send_queue: u64,

    /// systemd unit of the recorder
    #[serde(default = "default_service")]
    pub service: String,

    /// Maximum age in seconds of the newest data file
    #[serde(default = "default_max_data_age_secs")]
    pub max_data_age_secs: u64,

    /// Number of recent data files reported as context
    #[serde(default = "default_recent_files")]
    pub recent_files: usize,

    /// Number of log lines fetched by `log` and `report`
    #[serde(default = "default_log_lines")]
    pub log_lines: usize,

    /// Oldest acceptable mss_record version (enables the version check)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_record_version: Option<String>,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            datalink_host: default_datalink_host(),
            datalink_port: default_datalink_port(),
            datalink_process: default_datalink_process(),
            max_send_queue: default_max_send_queue(),
            service: default_service(),
            max_data_age_secs: default_max_data_age_secs(),
            recent_files: default_recent_files(),
            log_lines: default_log_lines(),
            min_record_version: None,
        }
    }
}

impl CheckSettings {
    /// Maximum age of the newest data file, or `None` if it does not fit
    /// in a [`TimeDelta`].
    pub fn max_data_age(&self) -> Option<TimeDelta> {
        i64::try_from(self.max_data_age_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
    }
}

fn default_datalink_host() -> String {
    "mss.mertl-research.at".to_string()
}

fn default_datalink_port() -> u16 {
    16000
}

fn default_datalink_process() -> String {
    "mseedscan2dali".to_string()
}

fn default_max_send_queue() -> u64 {
    10000
}

fn default_service() -> String {
    "mss_record.service".to_string()
}

fn default_max_data_age_secs() -> u64 {
    60
}

fn default_recent_files() -> usize {
    3
}

fn default_log_lines() -> usize {
    20
}

/// Locations of files on the station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct StationPaths {
    /// File holding the station serial number
    pub serial_file: String,

    /// Directory the recorder writes miniseed files to
    pub data_dir: String,

    /// Extension of the miniseed files (without dot)
    pub data_extension: String,

    /// File holding the system image version
    pub image_version_file: String,

    /// Installed mss_record python package
    pub record_package_dir: String,

    /// Datalink client configuration
    pub dali_config: String,

    /// Recorder configuration
    pub record_config: String,

    /// Recorder log file
    pub record_log: String,
}

impl Default for StationPaths {
    fn default() -> Self {
        Self {
            serial_file: "/home/mss/config/mss_serial".to_string(),
            data_dir: "/home/mss/mseed".to_string(),
            data_extension: "msd".to_string(),
            image_version_file: "/etc/mss_image_version".to_string(),
            record_package_dir: "/usr/lib/python3/dist-packages/mss_record".to_string(),
            dali_config: "/home/mss/config/dali.ini".to_string(),
            record_config: "/home/mss/config/mss_record.ini".to_string(),
            record_log: "/home/mss/log/mss_record.log".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config: MssConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, MssConfig::default());
        assert_eq!(config.connection.user, "mss");
        assert_eq!(config.connection.port, 22);
        assert_eq!(config.checks.datalink_port, 16000);
        assert_eq!(config.checks.max_send_queue, 10000);
        assert_eq!(config.checks.max_data_age_secs, 60);
        assert_eq!(config.checks.recent_files, 3);
        assert_eq!(config.paths.data_extension, "msd");
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let yaml = r#"
connection:
  host: station01
checks:
  max_data_age_secs: 120
"#;
        let config: MssConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.connection.host.as_deref(), Some("station01"));
        assert_eq!(config.connection.user, "mss");
        assert_eq!(config.checks.max_data_age_secs, 120);
        assert_eq!(config.checks.service, "mss_record.service");
    }

    #[test]
    fn paths_can_be_relocated() {
        let yaml = r#"
paths:
  data_dir: /data/mseed
"#;
        let config: MssConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.paths.data_dir, "/data/mseed");
        assert_eq!(config.paths.serial_file, "/home/mss/config/mss_serial");
    }

    #[test]
    fn serialization_skips_unset_options() {
        let yaml = serde_yaml::to_string(&MssConfig::default()).unwrap();
        assert!(!yaml.contains("host:"));
        assert!(!yaml.contains("min_record_version"));
        assert!(yaml.contains("datalink_process: mseedscan2dali"));
    }

    #[test]
    fn schema_lists_sections() {
        let schema = schemars::schema_for!(MssConfig);
        let json = serde_json::to_value(&schema).unwrap();
        let props = &json["properties"];
        assert!(props.get("connection").is_some());
        assert!(props.get("checks").is_some());
        assert!(props.get("paths").is_some());
    }
}
