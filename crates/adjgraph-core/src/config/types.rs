//! Manifest type definitions

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Instances processed when no manifest file is given
pub const DEFAULT_INSTANCES: &[(&str, usize)] = &[
    ("instancia_grafo/pcv4.txt", 4),
    ("instancia_grafo/pcv10.txt", 10),
    ("instancia_grafo/pcv50.txt", 50),
    ("instancia_grafo/pcv177.txt", 177),
];

/// A batch of graph instances and the traversals to run on each
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    /// Traversal settings shared by every instance
    #[serde(default)]
    pub traversal: TraversalConfig,

    /// Instances, processed in order
    #[serde(default, rename = "instance")]
    pub instances: Vec<Instance>,
}

/// One edge-list file and the vertex count it is loaded with
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Instance {
    /// Edge-list path, relative paths resolve against the manifest base directory
    pub path: PathBuf,

    /// Number of vertices; edge ids must be below this
    pub vertex_count: usize,
}

impl Instance {
    pub fn new(path: impl Into<PathBuf>, vertex_count: usize) -> Self {
        Self {
            path: path.into(),
            vertex_count,
        }
    }

    /// Resolve the instance path against `base` unless it is already absolute
    pub fn resolved_path(&self, base: &Path) -> PathBuf {
        if self.path.is_absolute() {
            self.path.clone()
        } else {
            base.join(&self.path)
        }
    }
}

/// Which traversals run and from where
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TraversalConfig {
    /// BFS start vertex
    #[serde(default = "default_bfs_source")]
    pub bfs_source: usize,

    /// BFS target vertex
    #[serde(default = "default_bfs_target")]
    pub bfs_target: usize,

    /// DFS start vertex
    #[serde(default = "default_dfs_start")]
    pub dfs_start: usize,

    /// Instances with fewer vertices are only displayed, not traversed
    #[serde(default = "default_min_vertices")]
    pub min_vertices: usize,
}

fn default_bfs_source() -> usize {
    0
}

fn default_bfs_target() -> usize {
    4
}

fn default_dfs_start() -> usize {
    0
}

fn default_min_vertices() -> usize {
    5
}

impl Default for TraversalConfig {
    fn default() -> Self {
        TraversalConfig {
            bfs_source: default_bfs_source(),
            bfs_target: default_bfs_target(),
            dfs_start: default_dfs_start(),
            min_vertices: default_min_vertices(),
        }
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Manifest {
            traversal: TraversalConfig::default(),
            instances: DEFAULT_INSTANCES
                .iter()
                .map(|&(path, vertex_count)| Instance::new(path, vertex_count))
                .collect(),
        }
    }
}
