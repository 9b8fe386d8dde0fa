//! Shared output formatting for commands
//!
//! Human output mirrors the classic console layout: matrix rows of `0`/`1`,
//! adjacency lines as `vertex: neighbors`, paths and visit orders as
//! space-separated vertex ids.

pub mod human;
pub mod json;

use std::path::Path;

use adjgraph_core::graph::{AdjacencyList, AdjacencyMatrix};
use adjgraph_core::loader::LoadedGraph;
use serde::Serialize;

/// Serializable snapshot of a loaded graph
#[derive(Debug, Serialize)]
pub struct GraphReport<'a> {
    pub path: &'a Path,
    pub vertex_count: usize,
    pub edges_read: usize,
    pub file_missing: bool,
    pub stopped_at_line: Option<usize>,
    pub matrix: &'a AdjacencyMatrix,
    pub adjacency: &'a AdjacencyList,
}

impl<'a> GraphReport<'a> {
    pub fn new(path: &'a Path, loaded: &'a LoadedGraph) -> Self {
        Self {
            path,
            vertex_count: loaded.graph.vertex_count(),
            edges_read: loaded.edges_read,
            file_missing: loaded.file_missing,
            stopped_at_line: loaded.stopped_at_line,
            matrix: loaded.graph.matrix(),
            adjacency: loaded.graph.adjacency(),
        }
    }
}
