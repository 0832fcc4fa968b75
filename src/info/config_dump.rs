//! Station software configuration.

use serde::{Deserialize, Serialize};

use crate::config::StationPaths;
use crate::remote::{run_remote, RemoteSession};

/// Contents of the station configuration files, line by line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigInfo {
    /// Datalink client configuration (`dali.ini`)
    pub dali_config: Vec<String>,
    /// Recorder configuration (`mss_record.ini`)
    pub mss_record_config: Vec<String>,
}

/// Read the station configuration files.
pub fn get_config_info(session: &mut dyn RemoteSession, paths: &StationPaths) -> ConfigInfo {
    tracing::info!("Gathering MSS software configuration information.");

    let dali = run_remote(session, &format!("cat {}", paths.dali_config));
    let record = run_remote(session, &format!("cat {}", paths.record_config));

    ConfigInfo {
        dali_config: dali.stdout,
        mss_record_config: record.stdout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::MockSession;

    #[test]
    fn reads_both_files_verbatim() {
        let mut session = MockSession::new()
            .with_stdout(
                "cat /home/mss/config/dali.ini",
                "[dali]\nserver = mss.mertl-research.at:16000\n",
            )
            .with_stdout(
                "cat /home/mss/config/mss_record.ini",
                "[record]\n  sps = 100\n",
            );

        let info = get_config_info(&mut session, &StationPaths::default());

        assert_eq!(
            info.dali_config,
            vec!["[dali]", "server = mss.mertl-research.at:16000"]
        );
        assert_eq!(info.mss_record_config, vec!["[record]", "  sps = 100"]);
    }

    #[test]
    fn unreadable_files_are_empty() {
        let mut session = MockSession::new().with_failure("cat /home/mss/config/dali.ini");
        let info = get_config_info(&mut session, &StationPaths::default());
        assert!(info.dali_config.is_empty());
        assert!(info.mss_record_config.is_empty());
    }
}
