//! Versions command implementation.

use crate::cli::args::VersionsArgs;
use crate::error::Result;
use crate::info::{get_version_info, VersionInfo};
use crate::remote::RemoteSession;
use crate::ui::UserInterface;

use super::check::print_json;
use super::dispatcher::{Command, CommandResult};
use super::station::{run_on_station, StationCommand, StationContext};

/// The versions command implementation.
pub struct VersionsCommand {
    context: StationContext,
    args: VersionsArgs,
}

impl VersionsCommand {
    /// Create a new versions command.
    pub fn new(context: StationContext, args: VersionsArgs) -> Self {
        Self { context, args }
    }
}

impl Command for VersionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        run_on_station(self, &self.context, ui)
    }
}

impl StationCommand for VersionsCommand {
    fn run(
        &self,
        session: &mut dyn RemoteSession,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let info = get_version_info(session, &self.context.config.paths);

        if self.args.json {
            print_json(&info, ui)?;
        } else {
            show_versions(&info, ui);
        }

        Ok(CommandResult::success())
    }
}

/// Show the known versions as key-value rows.
pub(super) fn show_versions(info: &VersionInfo, ui: &mut dyn UserInterface) {
    let versions = info.to_map();
    if versions.is_empty() {
        ui.warning("No version information available");
        return;
    }

    for (key, value) in &versions {
        ui.show_field(key, value);
    }
}
