//! Command dispatch logic for adjgraph

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use adjgraph_core::error::Result;
use tracing::debug;

mod command;

pub use command::{Command, CommandContext, NoCommand};

/// Resolve the base directory for relative paths
fn resolve_root_path(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = resolve_root_path(cli.root.clone());

    debug!(elapsed = ?start.elapsed(), root = %root.display(), "resolve_root");

    let ctx = CommandContext::new(cli, &root, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Run(args) => crate::commands::run::execute(ctx, args),
            Commands::Show(args) => crate::commands::show::execute(ctx, args),
            Commands::Bfs(args) => crate::commands::bfs::execute(ctx, args),
            Commands::Dfs(args) => crate::commands::dfs::execute(ctx, args),
        }
    }
}
