use serde::Serialize;

/// Result of a BFS path query between two vertices
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub from: usize,
    pub to: usize,
    pub found: bool,
    /// Vertices from `from` to `to` inclusive; empty when no path was found
    pub path: Vec<usize>,
    /// Number of edges on the path
    pub path_length: usize,
}

impl PathResult {
    pub fn not_found(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            found: false,
            path: Vec::new(),
            path_length: 0,
        }
    }

    pub fn from_path(from: usize, to: usize, path: Vec<usize>) -> Self {
        let path_length = path.len().saturating_sub(1);
        Self {
            from,
            to,
            found: true,
            path,
            path_length,
        }
    }
}

/// Vertices reachable from `start`, in first-visit order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DfsResult {
    pub start: usize,
    pub order: Vec<usize>,
}
