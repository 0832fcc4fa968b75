//! Command execution on the local machine.
//!
//! Used when the tool runs on the station itself.

use std::process::{Command, Stdio};

use crate::error::{MssError, Result};

use super::session::{CommandOutput, RemoteSession};

/// Session that runs commands through `/bin/sh -c`.
///
/// A POSIX shell is needed so that globs such as `*.msd` expand the same
/// way they do in an ssh login.
#[derive(Debug, Clone)]
pub struct LocalSession {
    shell: String,
}

impl Default for LocalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalSession {
    /// Create a local session using `/bin/sh`.
    pub fn new() -> Self {
        Self {
            shell: "/bin/sh".to_string(),
        }
    }
}

impl RemoteSession for LocalSession {
    fn execute(&mut self, command: &str) -> Result<CommandOutput> {
        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| MssError::Spawn {
                program: self.shell.clone(),
                source,
            })?;

        Ok(CommandOutput::from_text(
            &String::from_utf8_lossy(&output.stdout),
            &String::from_utf8_lossy(&output.stderr),
            output.status.code(),
        ))
    }

    fn target(&self) -> String {
        "localhost".to_string()
    }
}
