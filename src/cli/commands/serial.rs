//! Serial command implementation.

use crate::checks::read_serial;
use crate::error::Result;
use crate::remote::RemoteSession;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::station::{run_on_station, StationCommand, StationContext};

/// The serial command implementation.
pub struct SerialCommand {
    context: StationContext,
}

impl SerialCommand {
    /// Create a new serial command.
    pub fn new(context: StationContext) -> Self {
        Self { context }
    }
}

impl Command for SerialCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        run_on_station(self, &self.context, ui)
    }
}

impl StationCommand for SerialCommand {
    fn run(
        &self,
        session: &mut dyn RemoteSession,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        match read_serial(session, &self.context.config.paths) {
            Some(serial) => {
                ui.message(&serial);
                Ok(CommandResult::success())
            }
            None => {
                ui.error(&format!(
                    "Cannot read the serial number from {}",
                    self.context.config.paths.serial_file
                ));
                Ok(CommandResult::failure(1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MssConfig;
    use crate::remote::MockSession;
    use crate::ui::MockUI;

    fn command() -> SerialCommand {
        SerialCommand::new(StationContext::with_config(MssConfig::default(), false))
    }

    #[test]
    fn prints_serial() {
        let mut session =
            MockSession::new().with_stdout("cat /home/mss/config/mss_serial", "MSS-0042\n");
        let mut ui = MockUI::new();

        let result = command().run(&mut session, &mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.messages(), &["MSS-0042"]);
    }

    #[test]
    fn missing_serial_fails() {
        let mut session = MockSession::new();
        let mut ui = MockUI::new();

        let result = command().run(&mut session, &mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("/home/mss/config/mss_serial"));
    }
}
