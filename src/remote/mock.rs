//! Mock session for testing.
//!
//! `MockSession` implements [`RemoteSession`] by replaying canned output
//! keyed by the exact command string, and records every command it was
//! asked to run so tests can assert on the sequence.
//!
//! # Example
//!
//! ```
//! use mss_health::remote::{MockSession, RemoteSession};
//!
//! let mut session = MockSession::new()
//!     .with_stdout("systemctl status mss_record.service", "Active: active (running)\n");
//!
//! let output = session.execute("systemctl status mss_record.service").unwrap();
//! assert_eq!(output.stdout.len(), 1);
//! assert_eq!(session.commands().len(), 1);
//! ```

use std::collections::{HashMap, HashSet};

use crate::error::{MssError, Result};

use super::session::{CommandOutput, RemoteSession};

/// Canned-output session.
///
/// Commands without a configured response produce empty output.
#[derive(Debug, Default)]
pub struct MockSession {
    responses: HashMap<String, CommandOutput>,
    failures: HashSet<String>,
    commands: Vec<String>,
}

impl MockSession {
    /// Create a mock session with no responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to `command` with the given stdout text.
    pub fn with_stdout(self, command: &str, stdout: &str) -> Self {
        self.with_output(command, CommandOutput::from_text(stdout, "", Some(0)))
    }

    /// Respond to `command` with the given stdout and stderr text.
    pub fn with_streams(self, command: &str, stdout: &str, stderr: &str) -> Self {
        self.with_output(command, CommandOutput::from_text(stdout, stderr, Some(1)))
    }

    /// Respond to `command` with a prepared output.
    pub fn with_output(mut self, command: &str, output: CommandOutput) -> Self {
        self.responses.insert(command.to_string(), output);
        self
    }

    /// Make `command` fail as if the connection had dropped.
    pub fn with_failure(mut self, command: &str) -> Self {
        self.failures.insert(command.to_string());
        self
    }

    /// All commands executed so far, in order.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Check if a command was executed.
    pub fn ran(&self, command: &str) -> bool {
        self.commands.iter().any(|c| c == command)
    }
}

impl RemoteSession for MockSession {
    fn execute(&mut self, command: &str) -> Result<CommandOutput> {
        self.commands.push(command.to_string());

        if self.failures.contains(command) {
            return Err(MssError::Connection {
                target: self.target(),
                message: "connection closed by remote host".to_string(),
            });
        }

        Ok(self.responses.get(command).cloned().unwrap_or_default())
    }

    fn target(&self) -> String {
        "mock".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_command_yields_empty_output() {
        let mut session = MockSession::new();
        let output = session.execute("whoami").unwrap();
        assert_eq!(output, CommandOutput::empty());
    }

    #[test]
    fn records_commands_in_order() {
        let mut session = MockSession::new();
        session.execute("first").unwrap();
        session.execute("second").unwrap();
        assert_eq!(session.commands(), &["first", "second"]);
        assert!(session.ran("second"));
        assert!(!session.ran("third"));
    }

    #[test]
    fn streams_are_kept_apart() {
        let mut session = MockSession::new().with_streams("ping", "", "unknown host\n");
        let output = session.execute("ping").unwrap();
        assert!(output.stdout.is_empty());
        assert_eq!(output.stderr, vec!["unknown host"]);
    }

    #[test]
    fn failure_is_a_connection_error() {
        let mut session = MockSession::new().with_failure("ls");
        let err = session.execute("ls").unwrap_err();
        assert!(matches!(err, MssError::Connection { .. }));
    }
}
