//! `graphwalk ancestor` - earliest known ancestor lookup

use graphwalk_core::ancestry::{earliest_ancestor_id, NO_ANCESTOR};
use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::trace_time;
use serde_json::json;

use super::dispatch::CommandContext;
use crate::cli::AncestorArgs;

pub fn execute(ctx: &CommandContext, args: &AncestorArgs) -> Result<()> {
    let ancestor = earliest_ancestor_id(&args.pairs, args.start)?;

    trace_time!(ctx.start, "ancestor", pairs = args.pairs.len());

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = json!({
                "start": args.start,
                "earliest_ancestor": ancestor,
                "found": ancestor != NO_ANCESTOR,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if ctx.cli.quiet || ancestor != NO_ANCESTOR {
                println!("{}", ancestor);
            } else {
                println!("{} (no known parents for {})", ancestor, args.start);
            }
        }
    }

    Ok(())
}
