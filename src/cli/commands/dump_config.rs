//! Dump-config command implementation.
//!
//! The `mss-health dump-config` command prints the datalink and recorder
//! configuration files of the station.

use crate::cli::args::DumpConfigArgs;
use crate::config::StationPaths;
use crate::error::Result;
use crate::info::{get_config_info, ConfigInfo};
use crate::remote::RemoteSession;
use crate::ui::UserInterface;

use super::check::print_json;
use super::dispatcher::{Command, CommandResult};
use super::station::{run_on_station, StationCommand, StationContext};

/// The dump-config command implementation.
pub struct DumpConfigCommand {
    context: StationContext,
    args: DumpConfigArgs,
}

impl DumpConfigCommand {
    /// Create a new dump-config command.
    pub fn new(context: StationContext, args: DumpConfigArgs) -> Self {
        Self { context, args }
    }
}

impl Command for DumpConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        run_on_station(self, &self.context, ui)
    }
}

impl StationCommand for DumpConfigCommand {
    fn run(
        &self,
        session: &mut dyn RemoteSession,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let paths = &self.context.config.paths;
        let info = get_config_info(session, paths);

        if self.args.json {
            print_json(&info, ui)?;
        } else {
            show_config_info(&info, paths, ui);
        }

        Ok(CommandResult::success())
    }
}

/// Show each configuration file under its path.
pub(super) fn show_config_info(info: &ConfigInfo, paths: &StationPaths, ui: &mut dyn UserInterface) {
    let files = [
        (&paths.dali_config, &info.dali_config),
        (&paths.record_config, &info.mss_record_config),
    ];

    for (path, lines) in files {
        ui.show_header(path);
        if lines.is_empty() {
            ui.warning(&format!("{} is empty or could not be read", path));
        }
        for line in lines {
            ui.message(line);
        }
    }
}
