//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::{Cli, GraphArgs};
use adjgraph_core::error::{GraphError, Result};
use adjgraph_core::loader::{load_graph, LoadedGraph};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    /// Resolve a user-supplied path against `--root`
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Load the graph named by the shared graph arguments
    pub fn load(&self, args: &GraphArgs) -> Result<LoadedGraph> {
        let vertex_count = usize::try_from(args.vertices)
            .map_err(|_| GraphError::invalid_value("vertex count", args.vertices))?;
        load_graph(&self.resolve(&args.file), vertex_count)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("adjgraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Load edge-list graphs and traverse them with BFS and DFS.");
        println!();
        println!("Run `adjgraph --help` for usage information.");
        Ok(())
    }
}
