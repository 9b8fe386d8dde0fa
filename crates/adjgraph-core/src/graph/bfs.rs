mod path;

use std::collections::VecDeque;
use std::time::Instant;

use tracing::debug;

use crate::ensure_vertex;
use crate::error::Result;
use crate::graph::types::PathResult;
use crate::graph::GraphProvider;
use crate::trace_time;
use path::reconstruct_path;

/// Breadth-first expansion from `from`, stopping once `to` is dequeued.
///
/// Returns the predecessor of every vertex discovered before the stop.
/// `from` is marked visited up front, so its own predecessor is never set.
fn bfs_search(provider: &dyn GraphProvider, from: usize, to: usize) -> Vec<Option<usize>> {
    let vertex_count = provider.vertex_count();
    let mut visited = vec![false; vertex_count];
    let mut predecessors: Vec<Option<usize>> = vec![None; vertex_count];
    let mut queue: VecDeque<usize> = VecDeque::new();

    visited[from] = true;
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            break;
        }

        for &neighbor in provider.neighbors(current) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                predecessors[neighbor] = Some(current);
                queue.push_back(neighbor);
            }
        }
    }

    predecessors
}

/// Find a fewest-hops path between two vertices.
///
/// Ties between equally short paths go to whichever neighbor appears first in
/// the adjacency list. Querying a vertex against itself reports no path
/// because the start vertex never receives a predecessor.
pub fn bfs_find_path(provider: &dyn GraphProvider, from: usize, to: usize) -> Result<PathResult> {
    let start = Instant::now();
    let vertex_count = provider.vertex_count();
    ensure_vertex!(from, vertex_count);
    ensure_vertex!(to, vertex_count);

    let predecessors = bfs_search(provider, from, to);
    trace_time!(start, "bfs_search", from = from, to = to);

    let result = match reconstruct_path(to, &predecessors) {
        Some(path) => PathResult::from_path(from, to, path),
        None => PathResult::not_found(from, to),
    };

    debug!(
        from,
        to,
        found = result.found,
        path_length = result.path_length,
        "bfs_find_path"
    );

    Ok(result)
}

#[cfg(test)]
mod tests;
