//! Path reconstruction from BFS predecessor links

/// Walk predecessor links back from `to` and return the path in forward order.
///
/// Returns `None` when `to` never received a predecessor.
pub fn reconstruct_path(to: usize, predecessors: &[Option<usize>]) -> Option<Vec<usize>> {
    predecessors.get(to).copied().flatten()?;

    let mut path = vec![to];
    let mut current = to;
    while let Some(pred) = predecessors[current] {
        path.push(pred);
        current = pred;
    }

    path.reverse();
    Some(path)
}
