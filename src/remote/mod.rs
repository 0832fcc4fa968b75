//! Remote command execution on the station.
//!
//! Every check talks to the station through the [`RemoteSession`] trait:
//! one command in, captured stdout/stderr lines out.
//!
//! - [`SshSession`] runs commands through the system `ssh` client
//! - [`LocalSession`] runs commands on this machine (when running on the
//!   station itself)
//! - [`MockSession`] replays canned output in tests
//!
//! # Example
//!
//! ```
//! use mss_health::remote::{run_remote, MockSession};
//!
//! let mut session = MockSession::new().with_stdout("cat /home/mss/config/mss_serial", "MSS-0042\n");
//! let output = run_remote(&mut session, "cat /home/mss/config/mss_serial");
//! assert_eq!(output.first_line(), Some("MSS-0042"));
//! ```

pub mod local;
pub mod mock;
pub mod session;
pub mod ssh;

pub use local::LocalSession;
pub use mock::MockSession;
pub use session::{run_remote, CommandOutput, RemoteSession};
pub use ssh::SshSession;
