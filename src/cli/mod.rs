//! CLI argument parsing for adjgraph
//!
//! Global flags: --root, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{BfsArgs, DfsArgs, GraphArgs, RunArgs};
pub use adjgraph_core::format::OutputFormat;
use parse::parse_format;

/// Adjgraph - load edge-list graphs and run BFS/DFS over them
#[derive(Parser, Debug)]
#[command(name = "adjgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving relative graph and instance paths
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace, or a full directive)
    #[arg(long, global = true, env = "ADJGRAPH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load every instance in a manifest, display it and run BFS/DFS
    Run(RunArgs),

    /// Load an edge list and print its adjacency matrix and list
    Show(GraphArgs),

    /// Find a breadth-first path between two vertices
    Bfs(BfsArgs),

    /// List vertices reachable from a start vertex in depth-first order
    Dfs(DfsArgs),
}
