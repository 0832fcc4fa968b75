//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::checks::{CheckKind, CheckSelection};
use crate::config::ConnectionOverrides;

/// mss-health - Health checks for MSS seismic recording stations.
#[derive(Debug, Parser)]
#[command(name = "mss-health")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to settings file (overrides ~/.config/mss-health/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Station host name or address
    #[arg(short = 'H', long, global = true, env = "MSS_HEALTH_HOST")]
    pub host: Option<String>,

    /// SSH user on the station
    #[arg(short, long, global = true, env = "MSS_HEALTH_USER")]
    pub user: Option<String>,

    /// SSH port
    #[arg(short, long, global = true)]
    pub port: Option<u16>,

    /// SSH identity file
    #[arg(short, long, global = true)]
    pub identity: Option<PathBuf>,

    /// Run the commands on this machine instead of over SSH
    #[arg(long, global = true)]
    pub local: bool,

    /// Show verbose output, including raw station output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Connection settings given on the command line or in the environment.
    pub fn connection_overrides(&self) -> ConnectionOverrides {
        ConnectionOverrides {
            host: self.host.clone(),
            user: self.user.clone(),
            port: self.port,
            identity_file: self.identity.clone(),
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the health checks (default if no command specified)
    Check(CheckArgs),

    /// Run the checks and gather versions, configuration and log
    Report(ReportArgs),

    /// Show the station serial number
    Serial,

    /// Show installed MSS software versions
    Versions(VersionsArgs),

    /// Show the station software configuration files
    DumpConfig(DumpConfigArgs),

    /// Show the latest recorder log entries
    Log(LogArgs),

    /// Show the resolved mss-health settings
    Settings(SettingsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Run only these checks (comma-separated)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub only: Vec<CheckKind>,

    /// Skip these checks (comma-separated)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub skip: Vec<CheckKind>,
}

impl CheckArgs {
    /// The selected checks.
    pub fn selection(&self) -> CheckSelection {
        CheckSelection {
            only: self.only.clone(),
            skip: self.skip.clone(),
        }
    }
}

/// Arguments for the `report` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ReportArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Number of log lines to include
    #[arg(long)]
    pub log_lines: Option<usize>,
}

/// Arguments for the `versions` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct VersionsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `dump-config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DumpConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `log` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LogArgs {
    /// Number of lines to show
    #[arg(short = 'n', long = "lines")]
    pub lines: Option<usize>,
}

/// Arguments for the `settings` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SettingsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the JSON schema of the settings file
    #[arg(long, conflicts_with = "json")]
    pub schema: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
