//! Check command implementation.
//!
//! The `mss-health check` command runs the health checks and exits
//! non-zero when any of them fails.

use chrono::Utc;

use crate::checks::CheckOutcome;
use crate::cli::args::CheckArgs;
use crate::error::{MssError, Result};
use crate::remote::RemoteSession;
use crate::report::{HealthReport, ReportOptions};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::station::{run_on_station, StationCommand, StationContext};

/// Exit code when at least one check failed.
pub const CHECK_FAILED_EXIT_CODE: i32 = 1;

/// The check command implementation.
pub struct CheckCommand {
    context: StationContext,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(context: StationContext, args: CheckArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        run_on_station(self, &self.context, ui)
    }
}

impl StationCommand for CheckCommand {
    fn run(
        &self,
        session: &mut dyn RemoteSession,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let options = ReportOptions::checks(self.args.selection());
        let report = collect_report(session, &self.context, &options, ui)?;

        if self.args.json {
            print_json(&report, ui)?;
        } else {
            show_checks(&report, ui);
        }

        Ok(exit_for(&report))
    }
}

/// Collect a report behind a spinner.
pub(super) fn collect_report(
    session: &mut dyn RemoteSession,
    context: &StationContext,
    options: &ReportOptions,
    ui: &mut dyn UserInterface,
) -> Result<HealthReport> {
    let mut spinner = ui.start_spinner(&format!("Checking {}...", session.target()));
    let report = HealthReport::collect(session, &context.config, options, Utc::now());
    spinner.finish_clear();
    report
}

/// Print a value as pretty JSON.
pub(super) fn print_json<T: serde::Serialize>(value: &T, ui: &mut dyn UserInterface) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| MssError::Other(e.into()))?;
    ui.message(&json);
    Ok(())
}

/// Show one check result with its raw output.
pub(super) fn show_outcome(outcome: &CheckOutcome, ui: &mut dyn UserInterface) {
    let line = format!("{}: {}", outcome.kind.label(), outcome.summary);
    if outcome.passed {
        ui.success(&line);
    } else {
        ui.error(&line);
    }

    for detail in &outcome.details {
        ui.show_detail(detail);
    }
}

/// Show the station header and all check results.
pub(super) fn show_checks(report: &HealthReport, ui: &mut dyn UserInterface) {
    let title = match &report.serial {
        Some(serial) => format!("{} ({})", serial, report.target),
        None => report.target.clone(),
    };
    ui.show_header(&title);

    for outcome in &report.checks {
        show_outcome(outcome, ui);
    }

    let failed = report.failed().count();
    if failed > 0 {
        ui.message("");
        ui.message(&format!(
            "{} of {} checks failed",
            failed,
            report.checks.len()
        ));
    }
}

pub(super) fn exit_for(report: &HealthReport) -> CommandResult {
    if report.all_passed() {
        CommandResult::success()
    } else {
        CommandResult::failure(CHECK_FAILED_EXIT_CODE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::datalink::{ping_command, SOCKET_TABLE_COMMAND};
    use crate::checks::CheckKind;
    use crate::config::MssConfig;
    use crate::remote::MockSession;
    use crate::ui::{MockUI, OutputMode};

    fn command(args: CheckArgs) -> CheckCommand {
        CheckCommand::new(StationContext::with_config(MssConfig::default(), false), args)
    }

    fn datalink_only(json: bool) -> CheckArgs {
        CheckArgs {
            json,
            only: vec![CheckKind::Datalink],
            skip: vec![],
        }
    }

    fn connected_station() -> MockSession {
        MockSession::new()
            .with_stdout("cat /home/mss/config/mss_serial", "MSS-0042\n")
            .with_stdout(
                &ping_command(&MssConfig::default().checks),
                "64 bytes from mss.mertl-research.at\n",
            )
            .with_stdout(
                SOCKET_TABLE_COMMAND,
                "ESTAB 0 12 10.0.0.2:40000 10.0.0.1:16000 users:((\"mseedscan2dali\",pid=4,fd=3))\n",
            )
    }

    #[test]
    fn passing_check_exits_zero() {
        let cmd = command(datalink_only(false));
        let mut session = connected_station();
        let mut ui = MockUI::new();

        let result = cmd.run(&mut session, &mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.headers(), &["MSS-0042 (mock)"]);
        assert!(ui.has_success("Datalink"));
        assert_eq!(ui.spinners().len(), 1);
    }

    #[test]
    fn failing_check_exits_one() {
        let cmd = command(datalink_only(false));
        let mut session = MockSession::new();
        let mut ui = MockUI::new();

        let result = cmd.run(&mut session, &mut ui).unwrap();

        assert_eq!(result.exit_code, CHECK_FAILED_EXIT_CODE);
        assert!(ui.has_error("Datalink"));
        assert!(ui.has_message("1 of 1 checks failed"));
        assert_eq!(ui.headers(), &["mock"]);
    }

    #[test]
    fn details_are_passed_to_ui() {
        let cmd = command(datalink_only(false));
        let mut session = connected_station();
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        cmd.run(&mut session, &mut ui).unwrap();

        assert!(ui.details().iter().any(|d| d.contains("mseedscan2dali")));
    }

    #[test]
    fn json_output() {
        let cmd = command(datalink_only(true));
        let mut session = connected_station();
        let mut ui = MockUI::new();

        cmd.run(&mut session, &mut ui).unwrap();

        let json: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(json["serial"], "MSS-0042");
        assert_eq!(json["checks"][0]["kind"], "datalink");
        assert_eq!(json["checks"][0]["passed"], true);
        assert!(ui.headers().is_empty());
    }

    #[test]
    fn no_host_exits_two() {
        let cmd = command(CheckArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
    }
}
