//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands that talk to a station
//! also implement [`StationCommand`] and receive an open
//! [`RemoteSession`](crate::remote::RemoteSession), which lets the tests
//! drive them with a [`MockSession`](crate::remote::MockSession).

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod dump_config;
pub mod log;
pub mod report;
pub mod serial;
pub mod settings;
pub mod station;
pub mod versions;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use station::{run_on_station, StationCommand, StationContext};
