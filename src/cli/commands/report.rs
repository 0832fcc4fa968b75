//! Report command implementation.
//!
//! The `mss-health report` command runs the checks and gathers versions,
//! configuration files and the latest log entries in one go.

use crate::checks::CheckSelection;
use crate::cli::args::ReportArgs;
use crate::error::Result;
use crate::remote::RemoteSession;
use crate::report::{HealthReport, ReportOptions};
use crate::ui::UserInterface;

use super::check::{collect_report, exit_for, print_json, show_checks};
use super::dispatcher::{Command, CommandResult};
use super::dump_config::show_config_info;
use super::station::{run_on_station, StationCommand, StationContext};
use super::versions::show_versions;

/// The report command implementation.
pub struct ReportCommand {
    context: StationContext,
    args: ReportArgs,
}

impl ReportCommand {
    /// Create a new report command.
    pub fn new(context: StationContext, args: ReportArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ReportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        run_on_station(self, &self.context, ui)
    }
}

impl StationCommand for ReportCommand {
    fn run(
        &self,
        session: &mut dyn RemoteSession,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let options = ReportOptions::full(CheckSelection::all(), self.args.log_lines);
        let report = collect_report(session, &self.context, &options, ui)?;

        if self.args.json {
            print_json(&report, ui)?;
        } else {
            show_report(&report, &self.context, ui);
        }

        Ok(exit_for(&report))
    }
}

fn show_report(report: &HealthReport, context: &StationContext, ui: &mut dyn UserInterface) {
    show_checks(report, ui);

    if let Some(versions) = &report.versions {
        ui.show_header("Versions");
        show_versions(versions, ui);
    }

    if let Some(config) = &report.config {
        show_config_info(config, &context.config.paths, ui);
    }

    if let Some(tail) = &report.log_tail {
        ui.show_header(&context.config.paths.record_log);
        for line in tail {
            ui.message(line);
        }
    }
}
