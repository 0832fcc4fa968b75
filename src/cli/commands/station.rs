//! Station connection shared by the commands that talk to a station.

use std::path::PathBuf;

use crate::config::{load_config, validate, ConfigPaths, ConnectionOverrides, MssConfig};
use crate::error::Result;
use crate::remote::{LocalSession, RemoteSession, SshSession};
use crate::ui::UserInterface;

use super::dispatcher::CommandResult;

/// Exit code when there is no station to talk to.
pub const NO_STATION_EXIT_CODE: i32 = 2;

/// Resolved settings plus where the commands should run.
#[derive(Debug, Clone, Default)]
pub struct StationContext {
    /// Settings with command-line overrides applied
    pub config: MssConfig,
    /// Settings file the values came from, if any
    pub source: Option<PathBuf>,
    /// Run the commands locally instead of over SSH
    pub local: bool,
}

impl StationContext {
    /// Load and validate the settings.
    pub fn load(
        config_path: Option<&std::path::Path>,
        overrides: &ConnectionOverrides,
        local: bool,
    ) -> Result<Self> {
        let source = ConfigPaths::discover(config_path).active().cloned();
        let mut config = load_config(config_path)?;
        overrides.apply(&mut config);
        validate(&config)?;

        Ok(Self {
            config,
            source,
            local,
        })
    }

    /// Context around already resolved settings.
    pub fn with_config(config: MssConfig, local: bool) -> Self {
        Self {
            config,
            source: None,
            local,
        }
    }

    /// Open a session to the station, or `None` when no host is configured.
    pub fn open_session(&self) -> Option<Box<dyn RemoteSession>> {
        if self.local {
            return Some(Box::new(LocalSession::new()));
        }

        let host = self.config.connection.host.as_deref()?;
        Some(Box::new(SshSession::new(host, &self.config.connection)))
    }
}

/// A command that runs against a station session.
pub trait StationCommand {
    /// Run the command with an open session.
    fn run(
        &self,
        session: &mut dyn RemoteSession,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult>;
}

/// Open the station session and run a command on it.
pub fn run_on_station(
    command: &dyn StationCommand,
    context: &StationContext,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    match context.open_session() {
        Some(mut session) => command.run(session.as_mut(), ui),
        None => {
            ui.error(
                "No station configured. Use --host, MSS_HEALTH_HOST or connection.host in the settings file, or --local on the station itself.",
            );
            Ok(CommandResult::failure(NO_STATION_EXIT_CODE))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    struct Probe;

    impl StationCommand for Probe {
        fn run(
            &self,
            session: &mut dyn RemoteSession,
            ui: &mut dyn UserInterface,
        ) -> Result<CommandResult> {
            ui.message(&session.target());
            Ok(CommandResult::success())
        }
    }

    #[test]
    fn missing_host_fails_with_code_two() {
        let context = StationContext::default();
        let mut ui = MockUI::new();

        let result = run_on_station(&Probe, &context, &mut ui).unwrap();

        assert_eq!(result.exit_code, NO_STATION_EXIT_CODE);
        assert!(ui.has_error("No station configured"));
    }

    #[test]
    fn local_runs_without_host() {
        let context = StationContext::with_config(MssConfig::default(), true);
        let mut ui = MockUI::new();

        let result = run_on_station(&Probe, &context, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("localhost"));
    }

    #[test]
    fn configured_host_opens_ssh_session() {
        let mut config = MssConfig::default();
        config.connection.host = Some("mss01.example.org".to_string());
        let context = StationContext::with_config(config, false);

        let session = context.open_session().unwrap();
        assert_eq!(session.target(), "mss@mss01.example.org");
    }

    #[test]
    fn load_applies_overrides_and_records_source() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "connection:\n  host: from-file\n  user: station\n").unwrap();

        let overrides = ConnectionOverrides {
            host: Some("from-cli".to_string()),
            ..Default::default()
        };
        let context = StationContext::load(Some(&path), &overrides, false).unwrap();

        assert_eq!(context.config.connection.host.as_deref(), Some("from-cli"));
        assert_eq!(context.config.connection.user, "station");
        assert_eq!(context.source, Some(path));
    }

    #[test]
    fn load_rejects_invalid_settings() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "connection:\n  port: 0\n").unwrap();

        let result = StationContext::load(Some(&path), &ConnectionOverrides::default(), false);
        assert!(result.is_err());
    }
}
