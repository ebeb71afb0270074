//! Command trait and context for dispatching commands

use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::Cli;
use lostfound_core::config::{AppConfig, CONFIG_ENV_VAR, CONFIG_FILE};
use lostfound_core::error::Result;
use lostfound_core::feed::Snapshot;

use super::macros::trace_command;

/// Config file named by `--config`, else by `LOSTFOUND_CONFIG`
fn explicit_config_path(cli: &Cli) -> Option<PathBuf> {
    cli.config
        .clone()
        .or_else(|| env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()).map(PathBuf::from))
}

/// Load the explicitly named configuration, or the default file when present
pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    match explicit_config_path(cli) {
        Some(path) => AppConfig::load(&path),
        None => AppConfig::load_or_default(Path::new(CONFIG_FILE)),
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: AppConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: AppConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    pub fn input(&self) -> &PathBuf {
        &self.cli.input
    }

    /// Read the snapshot named by `--input`
    pub fn load_snapshot(&self) -> Result<Snapshot> {
        let snapshot = Snapshot::load(self.input())?;
        trace_command!(self.cli, self.start, "load_snapshot");
        Ok(snapshot)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("lostfound {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Duplicate detection and reporting for campus lost & found.");
        println!();
        println!("Run `lostfound --help` for usage information.");
        Ok(())
    }
}
