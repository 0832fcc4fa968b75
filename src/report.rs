//! Aggregated station health report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::checks::{read_serial, run_checks, CheckOutcome, CheckSelection};
use crate::config::MssConfig;
use crate::error::Result;
use crate::info::{get_config_info, get_log_tail, get_version_info, ConfigInfo, VersionInfo};
use crate::remote::RemoteSession;

/// What to gather besides the checks.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Checks to run
    pub selection: CheckSelection,
    /// Also gather versions, configuration files and the log tail
    pub include_info: bool,
    /// Log lines to fetch; `None` uses the configured default
    pub log_lines: Option<usize>,
}

impl ReportOptions {
    /// Checks only.
    pub fn checks(selection: CheckSelection) -> Self {
        Self {
            selection,
            ..Default::default()
        }
    }

    /// Checks plus all informational sections.
    pub fn full(selection: CheckSelection, log_lines: Option<usize>) -> Self {
        Self {
            selection,
            include_info: true,
            log_lines,
        }
    }
}

/// Everything known about one station at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Where the commands ran (`user@host` or `localhost`)
    pub target: String,
    pub serial: Option<String>,
    pub checked_at: DateTime<Utc>,
    pub checks: Vec<CheckOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versions: Option<VersionInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ConfigInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_tail: Option<Vec<String>>,
}

impl HealthReport {
    /// Run the checks and gather the requested information.
    pub fn collect(
        session: &mut dyn RemoteSession,
        config: &MssConfig,
        options: &ReportOptions,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let target = session.target();
        tracing::info!("Checking station {}.", target);

        let serial = read_serial(session, &config.paths);
        let checks = run_checks(session, config, &options.selection, now)?;

        let mut report = Self {
            target,
            serial,
            checked_at: now,
            checks,
            versions: None,
            config: None,
            log_tail: None,
        };

        if options.include_info {
            let lines = options.log_lines.unwrap_or(config.checks.log_lines);
            report.versions = Some(get_version_info(session, &config.paths));
            report.config = Some(get_config_info(session, &config.paths));
            report.log_tail = Some(get_log_tail(session, &config.paths, lines));
        }

        Ok(report)
    }

    /// Whether every check passed.
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Checks that did not pass.
    pub fn failed(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.checks.iter().filter(|c| !c.passed)
    }
}
