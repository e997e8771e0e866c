use super::parse::{parse_pair, parse_strategy};
use clap::Args;
use graphwalk_core::graph::Strategy;
use graphwalk_core::world::RoomId;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct TraverseArgs {
    /// Room map file (JSON)
    pub map: PathBuf,

    /// Start room (defaults to the lowest room id)
    #[arg(long, short)]
    pub start: Option<RoomId>,

    /// Visit order: bfs, dfs or dfs-recursive
    #[arg(long, short, value_parser = parse_strategy)]
    pub order: Option<Strategy>,
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Room map file (JSON)
    pub map: PathBuf,

    /// Start room
    #[arg(long)]
    pub from: RoomId,

    /// Destination room
    #[arg(long)]
    pub to: RoomId,

    /// Search strategy: bfs (shortest), dfs or dfs-recursive
    #[arg(long, short, value_parser = parse_strategy)]
    pub strategy: Option<Strategy>,
}

#[derive(Args, Debug, Clone)]
pub struct ExploreArgs {
    /// Room map file (JSON)
    pub map: PathBuf,

    /// Start room (defaults to the lowest room id)
    #[arg(long, short)]
    pub start: Option<RoomId>,

    /// Stop as soon as every room of the map has been discovered
    #[arg(long)]
    pub known_total: bool,

    /// Skip replaying the recorded path
    #[arg(long)]
    pub no_verify: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AncestorArgs {
    /// Parent/child relation as PARENT:CHILD (can be specified multiple times)
    #[arg(long = "pair", short, value_parser = parse_pair, action = clap::ArgAction::Append)]
    pub pairs: Vec<(i64, i64)>,

    /// Individual whose earliest ancestor is wanted
    #[arg(long, allow_negative_numbers = true)]
    pub start: i64,
}
