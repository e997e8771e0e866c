//! `graphwalk traverse` - enumerate reachable rooms

use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::trace_time;
use graphwalk_core::world::RoomMap;
use serde_json::json;
use tracing::debug;

use super::dispatch::CommandContext;
use super::{join_ids, start_room};
use crate::cli::TraverseArgs;

pub fn execute(ctx: &CommandContext, args: &TraverseArgs) -> Result<()> {
    let map = RoomMap::load(&args.map)?;
    let graph = map.to_graph()?;
    let start = start_room(&map, args.start)?;
    let order = args.order.unwrap_or(ctx.config.traversal.order);

    debug!(start, %order, rooms = graph.vertex_count(), "traverse");

    let visited = graph.traverse(&start, order)?;

    trace_time!(ctx.start, "traverse", visited = visited.len());

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = json!({
                "start": start,
                "order": order,
                "count": visited.len(),
                "visited": visited,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!(
                    "{} from room {}: {} rooms reachable",
                    order,
                    start,
                    visited.len()
                );
            }
            println!("{}", join_ids(&visited));
        }
    }

    Ok(())
}
