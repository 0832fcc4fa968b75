//! Datalink connection check.
//!
//! The station forwards its data with `mseedscan2dali` to a central
//! datalink server. The check first pings the server and then looks for an
//! established connection owned by the forwarding process in `ss -natp`:
//!
//! ```text
//! ESTAB 0 0 10.0.0.5:43122 91.114.1.7:16000 users:(("mseedscan2dali",pid=812,fd=3))
//! ```

use serde::{Deserialize, Serialize};

use crate::config::CheckSettings;
use crate::error::{MssError, Result};
use crate::remote::{run_remote, RemoteSession};

use super::{CheckKind, CheckOutcome};

/// Command that lists TCP sockets with their owning processes.
pub const SOCKET_TABLE_COMMAND: &str = "ss -natp";

/// Outcome of the datalink check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatalinkStatus {
    /// A valid datalink connection exists
    pub connected: bool,
    /// The datalink server answered the ping
    pub reachable: bool,
    /// Socket table (or ping output if the server was unreachable)
    pub output: Vec<String>,
}

impl DatalinkStatus {
    /// Convert into a generic check outcome.
    pub fn outcome(&self, settings: &CheckSettings) -> CheckOutcome {
        if self.connected {
            CheckOutcome::pass(
                CheckKind::Datalink,
                format!(
                    "{} connected to port {}",
                    settings.datalink_process, settings.datalink_port
                ),
                self.output.clone(),
            )
        } else if !self.reachable {
            CheckOutcome::fail(
                CheckKind::Datalink,
                format!("Cannot reach {}", settings.datalink_host),
                self.output.clone(),
            )
        } else {
            CheckOutcome::fail(
                CheckKind::Datalink,
                format!("No valid {} network connection", settings.datalink_process),
                self.output.clone(),
            )
        }
    }
}

/// Command that pings the datalink server once.
pub fn ping_command(settings: &CheckSettings) -> String {
    format!("ping -c 1 {}", settings.datalink_host)
}

/// Look for a valid datalink connection in `ss -natp` output.
///
/// A row matches when it has exactly six fields, is `ESTAB`, the peer
/// address ends in the datalink port, the process column belongs to the
/// forwarding process, and the send queue is within the limit.
pub fn find_datalink_connection(lines: &[String], settings: &CheckSettings) -> Result<bool> {
    let port_suffix = format!(":{}", settings.datalink_port);
    let users_prefix = format!(
        "users:((\"{}\"",
        settings.datalink_process.to_lowercase()
    );

    let mut connected = false;
    for line in lines {
        let fields: Vec<&str> = line.trim().split(' ').filter(|f| !f.is_empty()).collect();

        if fields.len() != 6
            || fields[0].to_lowercase() != "estab"
            || !fields[4].to_lowercase().ends_with(&port_suffix)
            || !fields[5].to_lowercase().starts_with(&users_prefix)
        {
            continue;
        }

        let send_queue: u64 = fields[2].parse().map_err(|_| {
            MssError::parse(
                "socket table row",
                format!("send queue '{}' is not an integer: '{}'", fields[2], line.trim()),
            )
        })?;

        if send_queue <= settings.max_send_queue {
            connected = true;
        }
    }

    Ok(connected)
}

/// Run the datalink check on the station.
pub fn check_datalink(
    session: &mut dyn RemoteSession,
    settings: &CheckSettings,
) -> Result<DatalinkStatus> {
    tracing::info!("Checking datalink connection.");

    let ping = run_remote(session, &ping_command(settings));
    if !ping.stderr_is_blank() || ping.stdout_is_blank() {
        tracing::error!(
            "Error reaching {} using ping:\n{}",
            settings.datalink_host,
            ping.stderr_text().trim()
        );
        tracing::error!(
            "No valid {} network connection found.",
            settings.datalink_process
        );
        return Ok(DatalinkStatus {
            connected: false,
            reachable: false,
            output: ping.stdout,
        });
    }

    let sockets = run_remote(session, SOCKET_TABLE_COMMAND);
    tracing::info!(
        "Output of {}:\n{}",
        SOCKET_TABLE_COMMAND,
        sockets.stdout_text()
    );

    let connected = find_datalink_connection(&sockets.stdout, settings)?;
    if connected {
        tracing::info!(
            "Found a valid {} network connection.",
            settings.datalink_process
        );
    } else {
        tracing::error!(
            "No valid {} network connection found.",
            settings.datalink_process
        );
    }

    Ok(DatalinkStatus {
        connected,
        reachable: true,
        output: sockets.stdout,
    })
}
