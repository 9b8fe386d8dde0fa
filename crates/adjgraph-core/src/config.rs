//! Instance manifest for batch runs
//!
//! A manifest is a TOML file listing edge-list instances:
//!
//! ```toml
//! [traversal]
//! bfs_source = 0
//! bfs_target = 4
//! dfs_start = 0
//! min_vertices = 5
//!
//! [[instance]]
//! path = "instancia_grafo/pcv10.txt"
//! vertex_count = 10
//! ```

pub mod types;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::bail_invalid;
use crate::error::{GraphError, Result};

pub use types::{Instance, Manifest, TraversalConfig, DEFAULT_INSTANCES};

impl Manifest {
    /// Parse and validate a manifest from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Load a manifest from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GraphError::io_operation("read manifest", path.display(), e))?;
        let manifest = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), instances = manifest.instances.len(), "load_manifest");
        Ok(manifest)
    }

    /// Reject instances that cannot form a graph
    pub fn validate(&self) -> Result<()> {
        for instance in &self.instances {
            if instance.vertex_count == 0 {
                bail_invalid!(
                    "vertex_count",
                    format!("0 for instance {}", instance.path.display())
                );
            }
        }
        Ok(())
    }

    /// Whether an instance is large enough for BFS and DFS to run
    pub fn should_traverse(&self, vertex_count: usize) -> bool {
        vertex_count >= self.traversal.min_vertices
    }
}
