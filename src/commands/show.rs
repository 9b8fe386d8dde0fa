//! Show command: print both adjacency representations of a graph

use tracing::debug;

use crate::cli::{GraphArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{human, json, GraphReport};
use adjgraph_core::error::Result;

pub fn execute(ctx: &CommandContext, args: &GraphArgs) -> Result<()> {
    let loaded = ctx.load(args)?;
    debug!(elapsed = ?ctx.start.elapsed(), "load_graph");

    match ctx.cli.format {
        OutputFormat::Json => {
            json::print_json(&GraphReport::new(&args.file, &loaded))?;
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("Adjacency matrix:");
            }
            human::print_matrix(loaded.graph.matrix());
            if !ctx.cli.quiet {
                println!();
                println!("Adjacency list:");
            }
            human::print_adjacency(loaded.graph.adjacency());
            if let Some(line) = loaded.stopped_at_line.filter(|_| !ctx.cli.quiet) {
                println!();
                println!("{}", human::format_truncation(line));
            }
        }
    }

    Ok(())
}
