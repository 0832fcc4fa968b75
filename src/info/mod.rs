//! Informational retrieval from the station.
//!
//! Unlike [`checks`](crate::checks), nothing here passes or fails: the
//! functions read version strings, configuration files and the recorder
//! log and return them (nearly) verbatim for the report.

pub mod config_dump;
pub mod log_tail;
pub mod versions;

pub use config_dump::{get_config_info, ConfigInfo};
pub use log_tail::get_log_tail;
pub use versions::{
    get_version_info, parse_assignment, parse_package_version, read_record_version, VersionInfo,
};
