//! Command execution over the system `ssh` client.

use std::process::{Command, Output, Stdio};
use std::time::Instant;

use crate::config::ConnectionSettings;
use crate::error::{MssError, Result};

use super::session::{CommandOutput, RemoteSession};

/// Exit status `ssh` uses for its own failures.
const SSH_ERROR_STATUS: i32 = 255;

/// Session that runs each command through a fresh `ssh` invocation.
///
/// Runs in batch mode, so key-based authentication must be set up; a
/// password prompt would otherwise block the check.
#[derive(Debug, Clone)]
pub struct SshSession {
    program: String,
    host: String,
    settings: ConnectionSettings,
}

impl SshSession {
    /// Create a session to `host` with the given connection settings.
    pub fn new(host: &str, settings: &ConnectionSettings) -> Self {
        Self {
            program: "ssh".to_string(),
            host: host.to_string(),
            settings: settings.clone(),
        }
    }

    /// Use a different ssh binary.
    pub fn with_program(mut self, program: &str) -> Self {
        self.program = program.to_string();
        self
    }

    /// Arguments passed to ssh for running `command`.
    ///
    /// `LogLevel=ERROR` keeps ssh's own warnings (such as newly added known
    /// hosts) out of the remote command's stderr.
    pub fn command_args(&self, command: &str) -> Vec<String> {
        let mut args = vec![
            "-o".to_string(),
            "BatchMode=yes".to_string(),
            "-o".to_string(),
            "LogLevel=ERROR".to_string(),
            "-o".to_string(),
            format!("ConnectTimeout={}", self.settings.connect_timeout),
            "-p".to_string(),
            self.settings.port.to_string(),
        ];

        if let Some(identity) = &self.settings.identity_file {
            args.push("-i".to_string());
            args.push(identity.display().to_string());
        }

        for option in &self.settings.ssh_options {
            args.push("-o".to_string());
            args.push(option.clone());
        }

        args.push(self.target());
        args.push("--".to_string());
        args.push(command.to_string());
        args
    }

    /// Turn a finished ssh process into command output.
    fn interpret(&self, output: &Output) -> Result<CommandOutput> {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let code = output.status.code();

        if code == Some(SSH_ERROR_STATUS) {
            return Err(MssError::Connection {
                target: self.target(),
                message: stderr.trim().to_string(),
            });
        }

        Ok(CommandOutput::from_text(&stdout, &stderr, code))
    }
}

impl RemoteSession for SshSession {
    fn execute(&mut self, command: &str) -> Result<CommandOutput> {
        let start = Instant::now();

        let output = Command::new(&self.program)
            .args(self.command_args(command))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| MssError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        tracing::debug!(
            "ssh {} finished with {:?} after {:?}",
            self.target(),
            output.status.code(),
            start.elapsed()
        );

        self.interpret(&output)
    }

    fn target(&self) -> String {
        format!("{}@{}", self.settings.user, self.host)
    }
}
