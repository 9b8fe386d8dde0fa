use std::time::Instant;

use tracing::debug;

use crate::ensure_vertex;
use crate::error::Result;
use crate::graph::types::DfsResult;
use crate::graph::GraphProvider;
use crate::trace_time;

/// Enumerate every vertex reachable from `start` in first-visit order.
///
/// Uses an explicit stack rather than recursion. A vertex may be pushed more
/// than once before it is visited; the visited check after each pop skips the
/// stale copies. Neighbors are pushed in adjacency-list order, so the last
/// neighbor of a vertex is explored first.
pub fn dfs_order(provider: &dyn GraphProvider, start: usize) -> Result<DfsResult> {
    let timer = Instant::now();
    let vertex_count = provider.vertex_count();
    ensure_vertex!(start, vertex_count);

    let mut visited = vec![false; vertex_count];
    let mut stack: Vec<usize> = vec![start];
    let mut order = Vec::new();

    while let Some(current) = stack.pop() {
        if visited[current] {
            continue;
        }
        visited[current] = true;
        order.push(current);

        stack.extend(
            provider
                .neighbors(current)
                .iter()
                .copied()
                .filter(|&neighbor| !visited[neighbor]),
        );
    }

    trace_time!(timer, "dfs_order", start = start);
    debug!(start, visited = order.len(), "dfs_order");

    Ok(DfsResult { start, order })
}
