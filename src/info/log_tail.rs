//! Latest recorder log entries.

use crate::config::StationPaths;
use crate::remote::{run_remote, RemoteSession};

/// Get the last `lines` entries of the recorder log.
pub fn get_log_tail(
    session: &mut dyn RemoteSession,
    paths: &StationPaths,
    lines: usize,
) -> Vec<String> {
    tracing::info!("Getting the latest mss_record log file entries.");
    run_remote(session, &format!("tail -n {} {}", lines, paths.record_log)).stdout
}
