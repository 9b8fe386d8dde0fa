//! Command argument structures

use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Manifest listing instances (defaults to the built-in instance list)
    #[arg(long, short)]
    pub manifest: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Edge-list file, one `origin destination` pair per line
    pub file: PathBuf,

    /// Number of vertices in the graph
    #[arg(long, short = 'n', value_parser = clap::value_parser!(u64).range(1..))]
    pub vertices: u64,
}

#[derive(Args, Debug)]
pub struct BfsArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Source vertex
    #[arg(long)]
    pub from: usize,

    /// Target vertex
    #[arg(long)]
    pub to: usize,
}

#[derive(Args, Debug)]
pub struct DfsArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Start vertex
    #[arg(long, default_value = "0")]
    pub start: usize,
}
