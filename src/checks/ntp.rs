//! NTP synchronisation check.
//!
//! Parses the peer table printed by `ntpq -np`:
//!
//! ```text
//!      remote           refid      st t when poll reach   delay   offset  jitter
//! ==============================================================================
//! *192.168.20.1    .GPS.            1 u   33   64  377    0.456   -0.012   0.008
//! +131.130.251.107 192.168.1.3      2 u   61   64  377   12.113    0.347   0.289
//! ```
//!
//! Only the system peer (`*`) and candidates (`+`) are looked at.

use serde::{Deserialize, Serialize};

use crate::error::{MssError, Result};
use crate::remote::{run_remote, RemoteSession};

use super::{CheckKind, CheckOutcome};

/// Command that prints the peer table.
pub const NTPQ_COMMAND: &str = "ntpq -np";

const NO_ASSOCIATION: &str = "no association id's returned";
const HEADER_TOKEN: &str = "===\n";

/// A selected or candidate peer from the `ntpq` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NtpPeer {
    /// Tally code (`*` or `+`)
    pub tally: char,
    /// Peer address without the tally code
    pub remote: String,
    /// Field 4: seconds since the peer was last heard
    pub when: i64,
    /// Field 5: poll interval in seconds
    pub poll: i64,
    /// Field 6: reachability register
    pub reach: i64,
}

impl NtpPeer {
    /// Parse a `*` or `+` line of the peer table.
    ///
    /// Fields are separated by runs of spaces. Fields 4, 5 and 6 must be
    /// integers.
    pub fn parse(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split(' ').filter(|f| !f.is_empty()).collect();

        if fields.len() < 7 {
            return Err(MssError::parse(
                "NTP peer line",
                format!("expected at least 7 fields, got {}: '{}'", fields.len(), line),
            ));
        }

        let mut remote = fields[0].chars();
        let tally = remote.next().unwrap_or(' ');

        Ok(Self {
            tally,
            remote: remote.as_str().to_string(),
            when: int_field(&fields, 4, line)?,
            poll: int_field(&fields, 5, line)?,
            reach: int_field(&fields, 6, line)?,
        })
    }

    /// Whether this peer keeps the clock in sync.
    ///
    /// field[4] <= 2 * field[5] and field[6] > 0.
    pub fn is_working(&self) -> bool {
        self.when <= self.poll.saturating_mul(2) && self.reach > 0
    }
}

fn int_field(fields: &[&str], index: usize, line: &str) -> Result<i64> {
    fields[index].parse().map_err(|_| {
        MssError::parse(
            "NTP peer line",
            format!("field {} '{}' is not an integer: '{}'", index, fields[index], line),
        )
    })
}

/// Outcome of the NTP check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NtpStatus {
    /// At least one peer is working
    pub working: bool,
    /// All selected and candidate peers
    pub peers: Vec<NtpPeer>,
    /// Raw `ntpq` output
    pub response: Vec<String>,
}

impl NtpStatus {
    fn not_working(response: Vec<String>) -> Self {
        Self {
            working: false,
            peers: Vec::new(),
            response,
        }
    }

    /// Peers that pass the working rule.
    pub fn working_peers(&self) -> impl Iterator<Item = &NtpPeer> {
        self.peers.iter().filter(|p| p.is_working())
    }

    /// Convert into a generic check outcome.
    pub fn outcome(&self) -> CheckOutcome {
        if self.working {
            let names: Vec<&str> = self.working_peers().map(|p| p.remote.as_str()).collect();
            CheckOutcome::pass(
                CheckKind::Ntp,
                format!("Synchronised ({})", names.join(", ")),
                self.response.clone(),
            )
        } else if self.peers.is_empty() {
            CheckOutcome::fail(
                CheckKind::Ntp,
                "No NTP peers selected",
                self.response.clone(),
            )
        } else {
            CheckOutcome::fail(
                CheckKind::Ntp,
                "No working NTP servers found",
                self.response.clone(),
            )
        }
    }
}

/// Parse the output of `ntpq -np`.
///
/// Returns a not-working status (with the response preserved) when ntpd
/// reports no associations or the table header is missing. Peer lines with
/// non-integer fields are parse errors.
pub fn parse_ntpq(lines: &[String]) -> Result<NtpStatus> {
    let mut response = String::new();
    for line in lines {
        response.push_str(line);
        response.push('\n');
    }

    if response.to_lowercase().starts_with(NO_ASSOCIATION) {
        tracing::error!("NTP is not running. ntpd response:\n {}", response);
        return Ok(NtpStatus::not_working(lines.to_vec()));
    }

    let payload = match response.find(HEADER_TOKEN) {
        Some(pos) => &response[pos + HEADER_TOKEN.len()..],
        None => {
            tracing::error!(
                "NTP seems to be running, but no expected result was returned by ntpq: {}",
                response
            );
            return Ok(NtpStatus::not_working(lines.to_vec()));
        }
    };

    tracing::info!("NTP is running.\n{}", response);

    let mut peers = Vec::new();
    for line in payload.lines() {
        if line.starts_with('*') || line.starts_with('+') {
            peers.push(NtpPeer::parse(line)?);
        }
    }

    let working = peers.iter().any(NtpPeer::is_working);
    if !working {
        tracing::error!("No working NTP servers found.");
    }

    Ok(NtpStatus {
        working,
        peers,
        response: lines.to_vec(),
    })
}

/// Run the NTP check on the station.
pub fn check_ntp(session: &mut dyn RemoteSession) -> Result<NtpStatus> {
    tracing::info!("Checking the NTP.");
    let output = run_remote(session, NTPQ_COMMAND);
    parse_ntpq(&output.stdout)
}
