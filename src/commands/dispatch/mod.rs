//! Command dispatch logic for lostfound

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use lostfound_core::error::Result;

mod command;
pub(crate) mod macros;

pub use command::CommandContext;
use command::{load_config, Command, NoCommand};
use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = load_config(cli)?;
    trace_command!(cli, start, "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Duplicates {
                threshold,
                search,
                kind,
                limit,
            } => commands::duplicates::execute(
                ctx,
                commands::duplicates::DuplicatesOptions {
                    threshold: *threshold,
                    search: search.as_deref(),
                    kind: *kind,
                    limit: *limit,
                },
            ),

            Commands::Similarity { first, second } => {
                commands::similarity::execute(ctx, first, second)
            }

            Commands::Categorize {
                confidence,
                category,
                plan,
            } => commands::categorize::execute(ctx, *confidence, *category, *plan),

            Commands::Summary { now } => commands::summary::execute(ctx, *now),

            Commands::Watch {
                threshold,
                interval_ms,
            } => commands::watch::execute(ctx, *threshold, *interval_ms),
        }
    }
}
