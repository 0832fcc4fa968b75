//! Installed recorder version check.
//!
//! Only runs when `checks.min_record_version` is configured.

use crate::config::MssConfig;
use crate::info::read_record_version;
use crate::remote::RemoteSession;
use crate::version::Version;

use super::{CheckKind, CheckOutcome};

/// Compare an installed version string against the minimum.
pub fn compare_record_version(installed: Option<&str>, minimum: &str) -> CheckOutcome {
    let minimum = Version::parse(minimum);

    let Some(installed) = installed else {
        return CheckOutcome::fail(
            CheckKind::RecordVersion,
            "Installed mss_record version is unknown",
            vec![format!("required: >= {}", minimum)],
        );
    };

    let details = vec![
        format!("installed: {}", installed),
        format!("required: >= {}", minimum),
    ];

    if Version::parse(installed) >= minimum {
        CheckOutcome::pass(
            CheckKind::RecordVersion,
            format!("mss_record {} is up to date", installed),
            details,
        )
    } else {
        CheckOutcome::fail(
            CheckKind::RecordVersion,
            format!("mss_record {} is older than {}", installed, minimum),
            details,
        )
    }
}

/// Run the version check, if a minimum version is configured.
pub fn check_record_version(
    session: &mut dyn RemoteSession,
    config: &MssConfig,
) -> Option<CheckOutcome> {
    let minimum = config.checks.min_record_version.as_deref()?;

    tracing::info!("Checking the installed mss_record version.");
    let installed = read_record_version(session, &config.paths);
    let outcome = compare_record_version(installed.as_deref(), minimum);

    if outcome.passed {
        tracing::info!("{}", outcome.summary);
    } else {
        tracing::error!("{}", outcome.summary);
    }

    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::MockSession;

    const INIT_GREP: &str =
        "cat /usr/lib/python3/dist-packages/mss_record/__init__.py | grep __version__";

    #[test]
    fn newer_version_passes() {
        let outcome = compare_record_version(Some("0.5.2"), "0.5.0");
        assert!(outcome.passed);
    }

    #[test]
    fn equal_version_passes() {
        assert!(compare_record_version(Some("0.5.0"), "0.5.0").passed);
    }

    #[test]
    fn older_version_fails() {
        let outcome = compare_record_version(Some("0.4.9"), "0.5.0");
        assert!(!outcome.passed);
        assert_eq!(outcome.summary, "mss_record 0.4.9 is older than 0.5.0");
    }

    #[test]
    fn release_candidate_counts_as_release() {
        assert!(compare_record_version(Some("0.5.0rc1"), "0.5.0").passed);
    }

    #[test]
    fn unknown_version_fails() {
        let outcome = compare_record_version(None, "0.5.0");
        assert!(!outcome.passed);
    }

    #[test]
    fn not_configured_is_skipped() {
        let mut session = MockSession::new();
        assert!(check_record_version(&mut session, &MssConfig::default()).is_none());
        assert!(session.commands().is_empty());
    }

    #[test]
    fn configured_check_reads_package() {
        let mut config = MssConfig::default();
        config.checks.min_record_version = Some("0.5.0".to_string());
        let mut session = MockSession::new().with_stdout(INIT_GREP, "__version__ = \"0.6.1\"\n");

        let outcome = check_record_version(&mut session, &config).unwrap();

        assert!(outcome.passed);
        assert!(session.ran(INIT_GREP));
    }
}
