//! Recorder service check.

use serde::{Deserialize, Serialize};

use crate::remote::{run_remote, RemoteSession};

use super::{CheckKind, CheckOutcome};

const RUNNING_PREFIX: &str = "active: active (running)";

/// Outcome of the service check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// Unit that was checked
    pub unit: String,
    /// The unit is active and running
    pub running: bool,
    /// Raw `systemctl status` output
    pub output: Vec<String>,
}

impl ServiceStatus {
    /// Convert into a generic check outcome.
    pub fn outcome(&self) -> CheckOutcome {
        if self.running {
            CheckOutcome::pass(
                CheckKind::Service,
                format!("{} is running", self.unit),
                self.output.clone(),
            )
        } else {
            CheckOutcome::fail(
                CheckKind::Service,
                format!("{} is not running", self.unit),
                self.output.clone(),
            )
        }
    }
}

/// Whether `systemctl status` output reports a running unit.
pub fn is_running(lines: &[String]) -> bool {
    lines
        .iter()
        .any(|line| line.trim().to_lowercase().starts_with(RUNNING_PREFIX))
}

/// Run the service check on the station.
pub fn check_service(session: &mut dyn RemoteSession, unit: &str) -> ServiceStatus {
    tracing::info!("Checking the {} service.", unit);

    let output = run_remote(session, &format!("systemctl status {}", unit));
    let running = is_running(&output.stdout);

    if running {
        tracing::info!("The {} service is running.", unit);
    } else {
        tracing::error!("The {} service is not running.", unit);
    }

    ServiceStatus {
        unit: unit.to_string(),
        running,
        output: output.stdout,
    }
}
