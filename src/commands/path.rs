//! `graphwalk path` - find a path between two rooms

use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::trace_time;
use graphwalk_core::world::RoomMap;
use serde_json::json;
use tracing::debug;

use super::dispatch::CommandContext;
use crate::cli::PathArgs;

/// Search for a path; an unreachable destination is reported, not an error
pub fn execute(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let map = RoomMap::load(&args.map)?;
    let graph = map.to_graph()?;
    let strategy = args.strategy.unwrap_or(ctx.config.search.strategy);

    debug!(from = args.from, to = args.to, %strategy, "path search");

    let found = graph.find_path(&args.from, &args.to, strategy)?;

    trace_time!(ctx.start, "path", found = found.is_some());

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = json!({
                "from": args.from,
                "to": args.to,
                "strategy": strategy,
                "found": found.is_some(),
                "path": found.as_ref().map(|p| p.vertices()),
                "path_length": found.as_ref().map(|p| p.edge_count()),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match &found {
            Some(path) => {
                println!("{}", path);
                if !ctx.cli.quiet {
                    println!("({} edges, {})", path.edge_count(), strategy);
                }
            }
            None => {
                println!("No path from {} to {}", args.from, args.to);
            }
        },
    }

    Ok(())
}
