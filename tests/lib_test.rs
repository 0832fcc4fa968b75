//! Library integration tests.

use mss_health::checks::{run_checks, CheckKind, CheckSelection};
use mss_health::config::{parse_config, MssConfig};
use mss_health::remote::MockSession;
use mss_health::report::{HealthReport, ReportOptions};
use mss_health::version::Version;
use mss_health::MssError;
use std::path::Path;

#[test]
fn error_types_are_public() {
    let err = MssError::parse("ntpq output", "bad field");
    assert!(err.to_string().contains("ntpq output"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> mss_health::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use mss_health::cli::{Cli, Commands};

    let cli = Cli::parse_from(["mss-health", "versions", "--json"]);

    if let Some(Commands::Versions(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Versions command");
    }
}

#[test]
fn settings_drive_the_checks() {
    let config = parse_config(
        "checks:\n  service: recorder.service\n",
        Path::new("inline.yml"),
    )
    .unwrap();
    let mut session = MockSession::new().with_stdout(
        "systemctl status recorder.service",
        "   Active: active (running) since Mon\n",
    );
    let selection = CheckSelection {
        only: vec![CheckKind::Service],
        skip: vec![],
    };

    let outcomes = run_checks(&mut session, &config, &selection, chrono::Utc::now()).unwrap();

    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].passed);
}

#[test]
fn report_serializes_to_json() {
    let mut session = MockSession::new();
    let report = HealthReport::collect(
        &mut session,
        &MssConfig::default(),
        &ReportOptions::checks(CheckSelection::all()),
        chrono::Utc::now(),
    )
    .unwrap();

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"checks\""));
    assert!(!report.all_passed());
}

#[test]
fn versions_compare_numerically() {
    assert!(Version::parse("0.10.0") > Version::parse("0.9.7"));
}
