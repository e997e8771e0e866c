//! `graphwalk explore` - walk a map and verify the walk covered it

use graphwalk_core::config::TerminationMode;
use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::maze::{explore, verify_coverage, Coverage};
use graphwalk_core::trace_time;
use graphwalk_core::world::{RoomId, RoomMap, World};
use serde_json::json;
use tracing::{debug, info};

use super::dispatch::CommandContext;
use super::{join_ids, start_room};
use crate::cli::ExploreArgs;

/// Explore the map; incomplete coverage is reported and then fails the command
pub fn execute(ctx: &CommandContext, args: &ExploreArgs) -> Result<()> {
    let map = RoomMap::load(&args.map)?;
    let total = map.len();
    let start = start_room(&map, args.start)?;
    let mut world = World::with_start(map, start)?;

    let mode = if args.known_total {
        TerminationMode::KnownTotal
    } else {
        ctx.config.walk.termination
    };
    debug!(start, total, ?mode, "explore");

    let report = explore(&mut world, mode.for_total(total))?;

    info!(
        moves = report.moves(),
        rooms = report.rooms_discovered,
        backtracks = report.backtracks,
        "walk finished"
    );

    let coverage: Option<Coverage<RoomId>> = if ctx.config.walk.verify && !args.no_verify {
        world.reset();
        let expected: Vec<RoomId> = world.map().room_ids().collect();
        Some(verify_coverage(&mut world, &report.path, expected)?)
    } else {
        None
    };

    trace_time!(ctx.start, "explore", moves = report.moves());

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = json!({
                "start": start,
                "termination": mode,
                "moves": report.moves(),
                "rooms_discovered": report.rooms_discovered,
                "backtracks": report.backtracks,
                "path": report.path,
                "coverage": coverage.as_ref().map(|c| json!({
                    "complete": c.is_complete(),
                    "visited": c.visited.len(),
                    "unvisited": c.unvisited,
                })),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!(
                    "Explored {} rooms in {} moves ({} backtracks)",
                    report.rooms_discovered,
                    report.moves(),
                    report.backtracks
                );
            }
            println!("{}", join_ids(&report.path));
            match &coverage {
                Some(c) if c.is_complete() => {
                    if !ctx.cli.quiet {
                        println!("Coverage: all {} rooms visited", c.visited.len());
                    }
                }
                Some(c) => {
                    let missing: Vec<RoomId> = c.unvisited.iter().copied().collect();
                    println!(
                        "Coverage: {} of {} rooms unvisited: {}",
                        c.shortfall(),
                        total,
                        join_ids(&missing)
                    );
                }
                None => {}
            }
        }
    }

    match coverage {
        Some(c) => c.ensure_complete(),
        None => Ok(()),
    }
}
