//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use graphwalk_core::config::Config;
use graphwalk_core::error::Result;

/// Resolve configuration from `--config` or `./graphwalk.toml`
pub fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load(path),
        None => Config::discover(&std::env::current_dir()?),
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: Config, start: Instant) -> Self {
        Self { cli, config, start }
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
        println!("graphwalk {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Directed-graph traversal, path search and maze exploration.");
        println!();
        println!("Run `graphwalk --help` for usage information.");
        Ok(())
    }
}
