//! DFS command: print vertices reachable from a start vertex

use crate::cli::{DfsArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{human, json};
use adjgraph_core::error::Result;
use adjgraph_core::graph::dfs_order;

pub fn execute(ctx: &CommandContext, args: &DfsArgs) -> Result<()> {
    let loaded = ctx.load(&args.graph)?;
    let result = dfs_order(&loaded.graph, args.start)?;

    match ctx.cli.format {
        OutputFormat::Json => json::print_json(&result)?,
        OutputFormat::Human => println!("{}", human::format_dfs(&result)),
    }

    Ok(())
}
