//! Command trait and context for dispatching commands

use std::time::Instant;

use tagmatch_core::bail_usage;
use tagmatch_core::catalog::Catalog;
use tagmatch_core::config::Config;
use tagmatch_core::error::Result;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a Config, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Load the catalog named by `--catalog` / `TAGMATCH_CATALOG`
    pub fn load_catalog(&self) -> Result<Catalog> {
        let Some(path) = &self.cli.catalog else {
            bail_usage!("no catalog given (use --catalog or set TAGMATCH_CATALOG)");
        };
        let catalog = Catalog::from_csv_path(path)?;
        debug!(items = catalog.len(), elapsed = ?self.start.elapsed(), "load_catalog");
        Ok(catalog)
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
        println!("tagmatch {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Content-based recommendations from catalog tags.");
        println!();
        println!("Run `tagmatch --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Recommend { item, count } => {
                let catalog = ctx.load_catalog()?;
                commands::recommend::execute(ctx.cli, ctx.config, &catalog, item, *count)
            }
            Commands::Score { first, second } => {
                let catalog = ctx.load_catalog()?;
                commands::score::execute(ctx.cli, ctx.config, &catalog, first, second)
            }
            Commands::List { limit } => {
                let catalog = ctx.load_catalog()?;
                commands::list::execute(ctx.cli, ctx.config, &catalog, *limit)
            }
        }
    }
}
