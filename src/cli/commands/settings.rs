//! Settings command implementation.
//!
//! The `mss-health settings` command shows the resolved local settings
//! (file values plus command-line overrides) or the settings JSON schema.

use crate::cli::args::SettingsArgs;
use crate::config::MssConfig;
use crate::error::{MssError, Result};
use crate::ui::UserInterface;

use super::check::print_json;
use super::dispatcher::{Command, CommandResult};
use super::station::StationContext;

/// The settings command implementation.
pub struct SettingsCommand {
    context: StationContext,
    args: SettingsArgs,
}

impl SettingsCommand {
    /// Create a new settings command.
    pub fn new(context: StationContext, args: SettingsArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &SettingsArgs {
        &self.args
    }
}

impl Command for SettingsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.schema {
            let schema = schemars::schema_for!(MssConfig);
            print_json(&schema, ui)?;
            return Ok(CommandResult::success());
        }

        if self.args.json {
            print_json(&self.context.config, ui)?;
            return Ok(CommandResult::success());
        }

        match &self.context.source {
            Some(path) => ui.message(&format!("# {}", path.display())),
            None => ui.message("# built-in defaults"),
        }
        let yaml =
            serde_yaml::to_string(&self.context.config).map_err(|e| MssError::Other(e.into()))?;
        ui.message(&yaml);

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::path::PathBuf;

    fn context() -> StationContext {
        let mut config = MssConfig::default();
        config.connection.host = Some("mss01.example.org".to_string());
        StationContext::with_config(config, false)
    }

    #[test]
    fn yaml_output_names_source() {
        let mut context = context();
        context.source = Some(PathBuf::from("/etc/mss-health.yml"));
        let cmd = SettingsCommand::new(context, SettingsArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.messages()[0], "# /etc/mss-health.yml");
        assert!(ui.has_message("host: mss01.example.org"));
    }

    #[test]
    fn yaml_output_without_file() {
        let cmd = SettingsCommand::new(context(), SettingsArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("# built-in defaults"));
    }

    #[test]
    fn json_output_round_trips() {
        let args = SettingsArgs {
            json: true,
            schema: false,
        };
        let cmd = SettingsCommand::new(context(), args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let parsed: MssConfig = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(parsed, context().config);
    }

    #[test]
    fn schema_output() {
        let args = SettingsArgs {
            json: false,
            schema: true,
        };
        let cmd = SettingsCommand::new(context(), args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let schema: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert!(schema["properties"]["connection"].is_object());
        assert!(cmd.args().schema);
    }
}
