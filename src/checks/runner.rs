//! Sequential execution of the selected checks.

use chrono::{DateTime, Utc};

use crate::config::MssConfig;
use crate::error::Result;
use crate::remote::RemoteSession;

use super::{
    check_datafiles, check_datalink, check_ntp, check_record_version, check_service, CheckKind,
    CheckOutcome,
};

/// Which checks to run.
///
/// An empty `only` list means every check; `skip` is applied afterwards.
#[derive(Debug, Clone, Default)]
pub struct CheckSelection {
    pub only: Vec<CheckKind>,
    pub skip: Vec<CheckKind>,
}

impl CheckSelection {
    /// Select every check.
    pub fn all() -> Self {
        Self::default()
    }

    /// Whether a check is selected.
    pub fn includes(&self, kind: CheckKind) -> bool {
        (self.only.is_empty() || self.only.contains(&kind)) && !self.skip.contains(&kind)
    }
}

/// Run the selected checks one after another.
///
/// The record version check only runs when a minimum version is
/// configured. Parse errors abort the run.
pub fn run_checks(
    session: &mut dyn RemoteSession,
    config: &MssConfig,
    selection: &CheckSelection,
    now: DateTime<Utc>,
) -> Result<Vec<CheckOutcome>> {
    let mut outcomes = Vec::new();

    for kind in CheckKind::ALL {
        if !selection.includes(kind) {
            tracing::debug!("Skipping check {}", kind);
            continue;
        }

        let outcome = match kind {
            CheckKind::Ntp => check_ntp(session)?.outcome(),
            CheckKind::Datalink => check_datalink(session, &config.checks)?.outcome(&config.checks),
            CheckKind::Service => check_service(session, &config.checks.service).outcome(),
            CheckKind::DataFiles => check_datafiles(session, config, now)?.outcome(now),
            CheckKind::RecordVersion => match check_record_version(session, config) {
                Some(outcome) => outcome,
                None => {
                    tracing::debug!("No minimum mss_record version configured");
                    continue;
                }
            },
        };

        outcomes.push(outcome);
    }

    Ok(outcomes)
}
