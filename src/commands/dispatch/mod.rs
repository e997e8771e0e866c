//! Command dispatch logic for graphwalk

use std::time::Instant;

use crate::cli::{Cli, Commands};
use graphwalk_core::error::Result;
use tracing::debug;

mod command;

pub use command::CommandContext;
use command::{load_config, Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = load_config(cli)?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Traverse(args) => super::traverse::execute(ctx, args),
            Commands::Path(args) => super::path::execute(ctx, args),
            Commands::Explore(args) => super::explore::execute(ctx, args),
            Commands::Ancestor(args) => super::ancestor::execute(ctx, args),
        }
    }
}
