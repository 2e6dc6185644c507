//! Command dispatch logic for tagmatch

use std::time::Instant;

use tagmatch_core::config::Config;
use tagmatch_core::error::Result;
use tracing::debug;

use crate::cli::Cli;

mod command;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = Config::discover(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, &config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
