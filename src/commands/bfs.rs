//! BFS command: print a fewest-hops path between two vertices

use crate::cli::{BfsArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{human, json};
use adjgraph_core::error::Result;
use adjgraph_core::graph::bfs_find_path;

pub fn execute(ctx: &CommandContext, args: &BfsArgs) -> Result<()> {
    let loaded = ctx.load(&args.graph)?;
    let result = bfs_find_path(&loaded.graph, args.from, args.to)?;

    match ctx.cli.format {
        OutputFormat::Json => json::print_json(&result)?,
        OutputFormat::Human => println!("{}", human::format_path(&result)),
    }

    Ok(())
}
