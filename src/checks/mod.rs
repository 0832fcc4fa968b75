//! Station health checks.
//!
//! Each check runs one or more commands on the station and hands the raw
//! text to a parser that decides pass or fail. The parsers are plain
//! functions over captured output, so they can be tested against sample
//! output without a station.
//!
//! - [`ntp`] - NTP peer synchronisation (`ntpq -np`)
//! - [`datalink`] - connection to the datalink server (`ping`, `ss -natp`)
//! - [`service`] - recorder service state (`systemctl status`)
//! - [`datafiles`] - freshness of the miniseed files (`ls`)
//! - [`record_version`] - installed recorder version against a minimum
//! - [`serial`] - station serial number (informational)
//! - [`runner`] - runs the selected checks in order
//!
//! Expected failures (service down, stale data, empty output) produce a
//! failed [`CheckOutcome`]. Output that cannot be parsed at all is an
//! [`MssError::Parse`](crate::error::MssError::Parse) error.

pub mod datafiles;
pub mod datalink;
pub mod ntp;
pub mod record_version;
pub mod runner;
pub mod serial;
pub mod service;

pub use datafiles::{check_datafiles, evaluate_datafiles, parse_file_timestamp, DataFileStatus};
pub use datalink::{check_datalink, find_datalink_connection, DatalinkStatus};
pub use ntp::{check_ntp, parse_ntpq, NtpPeer, NtpStatus};
pub use record_version::{check_record_version, compare_record_version};
pub use runner::{run_checks, CheckSelection};
pub use serial::read_serial;
pub use service::{check_service, is_running, ServiceStatus};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The checks mss-health knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    /// NTP synchronisation
    Ntp,
    /// Datalink connection
    Datalink,
    /// Recorder service
    Service,
    /// Miniseed data freshness
    DataFiles,
    /// Installed recorder version
    RecordVersion,
}

impl CheckKind {
    /// All checks in execution order.
    pub const ALL: [CheckKind; 5] = [
        CheckKind::Ntp,
        CheckKind::Datalink,
        CheckKind::Service,
        CheckKind::DataFiles,
        CheckKind::RecordVersion,
    ];

    /// Short identifier (as used on the command line).
    pub fn name(&self) -> &'static str {
        match self {
            CheckKind::Ntp => "ntp",
            CheckKind::Datalink => "datalink",
            CheckKind::Service => "service",
            CheckKind::DataFiles => "data-files",
            CheckKind::RecordVersion => "record-version",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            CheckKind::Ntp => "NTP",
            CheckKind::Datalink => "Datalink",
            CheckKind::Service => "Record service",
            CheckKind::DataFiles => "Data files",
            CheckKind::RecordVersion => "Record version",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one check: pass/fail plus the diagnostic text behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Which check produced this outcome
    pub kind: CheckKind,
    /// Whether the check passed
    pub passed: bool,
    /// One-line explanation
    pub summary: String,
    /// Raw command output or other context
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl CheckOutcome {
    /// A passed check.
    pub fn pass(kind: CheckKind, summary: impl Into<String>, details: Vec<String>) -> Self {
        Self {
            kind,
            passed: true,
            summary: summary.into(),
            details,
        }
    }

    /// A failed check.
    pub fn fail(kind: CheckKind, summary: impl Into<String>, details: Vec<String>) -> Self {
        Self {
            kind,
            passed: false,
            summary: summary.into(),
            details,
        }
    }
}
