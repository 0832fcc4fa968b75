//! The remote session contract.

use crate::error::Result;

/// Captured output of one remote command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Standard output, split into lines (without line terminators).
    pub stdout: Vec<String>,

    /// Standard error, split into lines (without line terminators).
    pub stderr: Vec<String>,

    /// Exit code of the remote command (None if unknown or killed).
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    /// Output of a command that produced nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build output from raw captured text.
    pub fn from_text(stdout: &str, stderr: &str, exit_code: Option<i32>) -> Self {
        Self {
            stdout: stdout.lines().map(String::from).collect(),
            stderr: stderr.lines().map(String::from).collect(),
            exit_code,
        }
    }

    /// Stdout as one string, every line terminated by `\n`.
    pub fn stdout_text(&self) -> String {
        join_lines(&self.stdout)
    }

    /// Stderr as one string, every line terminated by `\n`.
    pub fn stderr_text(&self) -> String {
        join_lines(&self.stderr)
    }

    /// First stdout line, if any.
    pub fn first_line(&self) -> Option<&str> {
        self.stdout.first().map(String::as_str)
    }

    /// Whether stdout is empty or whitespace only.
    pub fn stdout_is_blank(&self) -> bool {
        self.stdout.iter().all(|l| l.trim().is_empty())
    }

    /// Whether stderr is empty or whitespace only.
    pub fn stderr_is_blank(&self) -> bool {
        self.stderr.iter().all(|l| l.trim().is_empty())
    }
}

fn join_lines(lines: &[String]) -> String {
    let mut text = String::new();
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}

/// A channel that can run shell commands on the station.
///
/// Commands are issued one at a time; each call blocks until the command
/// has finished and its output has been collected.
pub trait RemoteSession {
    /// Run a command and capture its output.
    ///
    /// A non-zero exit status of the command itself is not an error; only
    /// failures of the transport are.
    fn execute(&mut self, command: &str) -> Result<CommandOutput>;

    /// Human-readable description of where commands run (e.g. `mss@station01`).
    fn target(&self) -> String;
}

/// Run a command, turning transport failures into empty output.
///
/// The failure is logged at error level. Checks treat the resulting empty
/// output as a failed check.
pub fn run_remote(session: &mut dyn RemoteSession, command: &str) -> CommandOutput {
    tracing::debug!("Running on {}: {}", session.target(), command);

    match session.execute(command) {
        Ok(output) => output,
        Err(e) => {
            tracing::error!("Remote command '{}' failed: {}", command, e);
            CommandOutput::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::MockSession;

    #[test]
    fn from_text_splits_lines() {
        let output = CommandOutput::from_text("a\nb\n", "", Some(0));
        assert_eq!(output.stdout, vec!["a", "b"]);
        assert!(output.stderr.is_empty());
    }

    #[test]
    fn stdout_text_terminates_every_line() {
        let output = CommandOutput::from_text("a\nb", "", None);
        assert_eq!(output.stdout_text(), "a\nb\n");
    }

    #[test]
    fn blank_detection_ignores_whitespace() {
        let output = CommandOutput::from_text("  \n\n", " \n", Some(0));
        assert!(output.stdout_is_blank());
        assert!(output.stderr_is_blank());
        assert!(CommandOutput::empty().stdout_is_blank());
    }

    #[test]
    fn first_line_of_empty_output_is_none() {
        assert_eq!(CommandOutput::empty().first_line(), None);
    }

    #[test]
    fn run_remote_returns_output() {
        let mut session = MockSession::new().with_stdout("uptime", "up 3 days\n");
        let output = run_remote(&mut session, "uptime");
        assert_eq!(output.first_line(), Some("up 3 days"));
    }

    #[test]
    fn run_remote_swallows_transport_errors() {
        let mut session = MockSession::new().with_failure("uptime");
        let output = run_remote(&mut session, "uptime");
        assert_eq!(output, CommandOutput::empty());
        assert_eq!(session.commands(), &["uptime".to_string()]);
    }
}
