//! Log command implementation.

use crate::cli::args::LogArgs;
use crate::error::Result;
use crate::info::get_log_tail;
use crate::remote::RemoteSession;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::station::{run_on_station, StationCommand, StationContext};

/// The log command implementation.
pub struct LogCommand {
    context: StationContext,
    args: LogArgs,
}

impl LogCommand {
    /// Create a new log command.
    pub fn new(context: StationContext, args: LogArgs) -> Self {
        Self { context, args }
    }

    /// Number of lines to fetch.
    pub fn lines(&self) -> usize {
        self.args
            .lines
            .unwrap_or(self.context.config.checks.log_lines)
    }
}

impl Command for LogCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        run_on_station(self, &self.context, ui)
    }
}

impl StationCommand for LogCommand {
    fn run(
        &self,
        session: &mut dyn RemoteSession,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let tail = get_log_tail(session, &self.context.config.paths, self.lines());

        if tail.is_empty() {
            ui.warning(&format!(
                "No entries in {}",
                self.context.config.paths.record_log
            ));
        }
        for line in &tail {
            ui.message(line);
        }

        Ok(CommandResult::success())
    }
}
