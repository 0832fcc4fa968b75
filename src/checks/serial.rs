//! Station serial number.

use crate::config::StationPaths;
use crate::remote::{run_remote, RemoteSession};

/// Read the serial number of the station.
///
/// Returns `None` (and logs an error) if the serial file is empty or
/// unreadable.
pub fn read_serial(session: &mut dyn RemoteSession, paths: &StationPaths) -> Option<String> {
    let output = run_remote(session, &format!("cat {}", paths.serial_file));
    let serial = output.first_line().map(str::trim).unwrap_or_default();

    if serial.is_empty() {
        tracing::error!("Cannot read the MSS serial number from {}", paths.serial_file);
        None
    } else {
        Some(serial.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::MockSession;

    #[test]
    fn reads_first_line_trimmed() {
        let mut session = MockSession::new()
            .with_stdout("cat /home/mss/config/mss_serial", "  MSS-0042 \nignored\n");
        let serial = read_serial(&mut session, &StationPaths::default());
        assert_eq!(serial.as_deref(), Some("MSS-0042"));
    }

    #[test]
    fn empty_serial_is_none() {
        let mut session = MockSession::new();
        assert!(read_serial(&mut session, &StationPaths::default()).is_none());
    }

    #[test]
    fn uses_configured_path() {
        let paths = StationPaths {
            serial_file: "/etc/mss/serial".to_string(),
            ..Default::default()
        };
        let mut session = MockSession::new().with_stdout("cat /etc/mss/serial", "MSS-7\n");
        assert_eq!(read_serial(&mut session, &paths).as_deref(), Some("MSS-7"));
    }
}
