//! Run command: batch-process every instance in a manifest
//!
//! Each instance is loaded, displayed and, when it has at least
//! `min_vertices` vertices, traversed with BFS and DFS. A failure in one
//! instance is reported and the run moves on to the next.

use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::cli::{OutputFormat, RunArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{human, json, GraphReport};
use adjgraph_core::config::{Instance, Manifest, TraversalConfig};
use adjgraph_core::error::{GraphError, Result};
use adjgraph_core::graph::{bfs_find_path, dfs_order, GraphStore};
use adjgraph_core::loader::load_graph;

/// Read the manifest and pick the directory its relative paths resolve against
fn resolve_manifest(ctx: &CommandContext, args: &RunArgs) -> Result<(Manifest, PathBuf)> {
    match &args.manifest {
        Some(path) => {
            let path = ctx.resolve(path);
            let manifest = Manifest::load(&path)?;
            let base = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| ctx.root.clone());
            Ok((manifest, base))
        }
        None => Ok((Manifest::default(), ctx.root.clone())),
    }
}

pub fn execute(ctx: &CommandContext, args: &RunArgs) -> Result<()> {
    let (manifest, base) = resolve_manifest(ctx, args)?;
    debug!(
        instances = manifest.instances.len(),
        base = %base.display(),
        "run"
    );

    match ctx.cli.format {
        OutputFormat::Human => {
            for (index, instance) in manifest.instances.iter().enumerate() {
                if index > 0 {
                    println!();
                }
                run_human(ctx, &manifest, instance, &base);
            }
        }
        OutputFormat::Json => {
            let instances: Vec<Value> = manifest
                .instances
                .iter()
                .map(|instance| run_json(&manifest, instance, &base))
                .collect();
            json::print_json(&json!({ "instances": instances }))?;
        }
    }

    Ok(())
}

fn report_failure(instance: &Instance, stage: &str, err: &GraphError) {
    warn!(path = %instance.path.display(), stage, error = %err, "instance failed");
    eprintln!("error: {} ({}): {}", instance.path.display(), stage, err);
}

fn run_human(ctx: &CommandContext, manifest: &Manifest, instance: &Instance, base: &Path) {
    let quiet = ctx.cli.quiet;
    let name = instance.path.display();

    if !quiet {
        println!(
            "Loading instance {} with {} vertices.",
            name, instance.vertex_count
        );
        println!();
    }

    let loaded = match load_graph(&instance.resolved_path(base), instance.vertex_count) {
        Ok(loaded) => loaded,
        Err(e) => {
            report_failure(instance, "load", &e);
            return;
        }
    };

    if !quiet {
        println!("Adjacency matrix of {}:", name);
    }
    human::print_matrix(loaded.graph.matrix());

    if !quiet {
        println!();
        println!("Adjacency list of {}:", name);
    }
    human::print_adjacency(loaded.graph.adjacency());

    if let Some(line) = loaded.stopped_at_line.filter(|_| !quiet) {
        println!();
        println!("{}", human::format_truncation(line));
    }

    if !manifest.should_traverse(instance.vertex_count) {
        return;
    }

    traverse_human(&loaded.graph, instance, &manifest.traversal, quiet);
}

fn traverse_human(
    graph: &GraphStore,
    instance: &Instance,
    traversal: &TraversalConfig,
    quiet: bool,
) {
    if !quiet {
        println!();
        println!(
            "BFS from vertex {} to vertex {}:",
            traversal.bfs_source, traversal.bfs_target
        );
    }
    match bfs_find_path(graph, traversal.bfs_source, traversal.bfs_target) {
        Ok(result) => println!("{}", human::format_path(&result)),
        Err(e) => report_failure(instance, "bfs", &e),
    }

    if !quiet {
        println!();
        println!("DFS from vertex {}:", traversal.dfs_start);
    }
    match dfs_order(graph, traversal.dfs_start) {
        Ok(result) => println!("{}", human::format_dfs(&result)),
        Err(e) => report_failure(instance, "dfs", &e),
    }
}

/// Error envelope body without the outer `error` key
fn error_value(err: &GraphError) -> Value {
    err.to_json()["error"].clone()
}

fn run_json(manifest: &Manifest, instance: &Instance, base: &Path) -> Value {
    let name = instance.path.display().to_string();
    let loaded = match load_graph(&instance.resolved_path(base), instance.vertex_count) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!(path = %instance.path.display(), error = %e, "instance failed");
            return json!({
                "path": name,
                "vertex_count": instance.vertex_count,
                "error": error_value(&e),
            });
        }
    };

    let mut value = match serde_json::to_value(GraphReport::new(&instance.path, &loaded)) {
        Ok(value) => value,
        Err(e) => return json!({ "path": name, "error": error_value(&GraphError::from(e)) }),
    };

    if manifest.should_traverse(instance.vertex_count) {
        let traversal = &manifest.traversal;
        value["bfs"] = match bfs_find_path(&loaded.graph, traversal.bfs_source, traversal.bfs_target)
        {
            Ok(result) => json!(result),
            Err(e) => json!({ "error": error_value(&e) }),
        };
        value["dfs"] = match dfs_order(&loaded.graph, traversal.dfs_start) {
            Ok(result) => json!(result),
            Err(e) => json!({ "error": error_value(&e) }),
        };
    }

    value
}
