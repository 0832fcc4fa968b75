//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::config::ConnectionOverrides;
use crate::error::Result;
use crate::ui::UserInterface;

use super::station::StationContext;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
///
/// Settings are loaded only for commands that need them, so a broken
/// settings file does not prevent generating completions.
pub struct CommandDispatcher {
    config_path: Option<PathBuf>,
    overrides: ConnectionOverrides,
    local: bool,
}

impl CommandDispatcher {
    /// Create a new dispatcher from the global flags.
    pub fn new(config_path: Option<PathBuf>, overrides: ConnectionOverrides, local: bool) -> Self {
        Self {
            config_path,
            overrides,
            local,
        }
    }

    /// Create a dispatcher from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(cli.config.clone(), cli.connection_overrides(), cli.local)
    }

    /// Whether commands run on this machine.
    pub fn is_local(&self) -> bool {
        self.local
    }

    fn context(&self) -> Result<StationContext> {
        StationContext::load(self.config_path.as_deref(), &self.overrides, self.local)
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(self.context()?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Report(args)) => {
                let cmd = super::report::ReportCommand::new(self.context()?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Serial) => {
                let cmd = super::serial::SerialCommand::new(self.context()?);
                cmd.execute(ui)
            }
            Some(Commands::Versions(args)) => {
                let cmd = super::versions::VersionsCommand::new(self.context()?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::DumpConfig(args)) => {
                let cmd = super::dump_config::DumpConfigCommand::new(self.context()?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Log(args)) => {
                let cmd = super::log::LogCommand::new(self.context()?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Settings(args)) => {
                let cmd = super::settings::SettingsCommand::new(self.context()?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to check command with default args
                let cmd = super::check::CheckCommand::new(self.context()?, CheckArgs::default());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_from_cli() {
        let cli = Cli::try_parse_from(["mss-health", "--local", "serial"]).unwrap();
        let dispatcher = CommandDispatcher::from_cli(&cli);
        assert!(dispatcher.is_local());
    }

    #[test]
    fn default_command_needs_a_station() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "").unwrap();

        let dispatcher = CommandDispatcher::new(Some(path), ConnectionOverrides::default(), false);
        let cli = Cli::try_parse_from(["mss-health"]).unwrap();
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn missing_explicit_settings_is_an_error() {
        let dispatcher = CommandDispatcher::new(
            Some(PathBuf::from("/nonexistent/mss-health.yml")),
            ConnectionOverrides::default(),
            false,
        );
        let cli = Cli::try_parse_from(["mss-health", "settings"]).unwrap();
        let mut ui = MockUI::new();

        assert!(dispatcher.dispatch(&cli, &mut ui).is_err());
    }
}
