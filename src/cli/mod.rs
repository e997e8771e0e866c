//! CLI argument parsing for graphwalk
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level,
//! --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{AncestorArgs, ExploreArgs, PathArgs, TraverseArgs};
pub use graphwalk_core::format::OutputFormat;
use parse::parse_format;

/// Graphwalk - directed-graph traversal, path search and maze exploration
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, graphwalk_core=trace)
    #[arg(long, global = true, env = "GRAPHWALK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to ./graphwalk.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Enumerate the rooms reachable from a start room
    Traverse(TraverseArgs),

    /// Find a path between two rooms
    Path(PathArgs),

    /// Explore a map with the maze walker and verify coverage
    Explore(ExploreArgs),

    /// Find the earliest ancestor from parent:child pairs
    Ancestor(AncestorArgs),
}
