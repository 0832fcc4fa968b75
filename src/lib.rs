//! mss-health - Health checks for MSS seismic recording stations.
//!
//! mss-health connects to a Mertl Research seismic station (MSS) over SSH,
//! runs a fixed set of shell commands and turns their text output into
//! pass/fail checks and informational records.
//!
//! # Modules
//!
//! - [`checks`] - NTP, datalink, service and data freshness checks
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings loading, schema and validation
//! - [`error`] - Error types and result aliases
//! - [`info`] - Versions, configuration files and log tail
//! - [`remote`] - Command execution over SSH, locally or mocked
//! - [`report`] - Aggregated health report
//! - [`ui`] - Terminal output
//! - [`version`] - Dotted version numbers
//!
//! # Example
//!
//! ```
//! use mss_health::checks::parse_ntpq;
//!
//! let output: Vec<String> = [
//!     "     remote           refid      st t when poll reach   delay   offset  jitter",
//!     "==============================================================================",
//!     "*192.168.1.1    .GPS.            1 u   12   64  377    0.312    0.021   0.004",
//! ]
//! .iter()
//! .map(|l| l.to_string())
//! .collect();
//!
//! let status = parse_ntpq(&output).unwrap();
//! assert!(status.working);
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod info;
pub mod remote;
pub mod report;
pub mod ui;
pub mod version;

pub use error::{MssError, Result};
