//! Undirected graph storage with two synchronized representations
//!
//! A [`GraphStore`] keeps a dense adjacency matrix and an adjacency list side by
//! side. The only mutation is [`GraphStore::add_edge`], which updates both, so
//! callers only ever see read-only views of either representation.

use std::collections::BTreeMap;

use serde::ser::{Serialize, Serializer};
use tracing::trace;

use crate::ensure_vertex;
use crate::error::{GraphError, Result};

/// Adjacency list keyed by vertex id.
///
/// Only vertices that are an endpoint of at least one inserted edge have an
/// entry. Neighbors keep insertion order and duplicates are kept.
pub type AdjacencyList = BTreeMap<usize, Vec<usize>>;

/// Dense `n x n` adjacency matrix stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    fn set(&mut self, row: usize, col: usize) {
        self.cells[row * self.size + col] = true;
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether edge `(row, col)` is present. Out-of-range cells read as absent.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.cells[row * self.size + col]
    }

    /// Iterate the matrix one row at a time
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks(0) panics; a zero-sized matrix cannot be built through GraphStore
        self.cells.chunks(self.size.max(1))
    }

}

impl Serialize for AdjacencyMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(
            self.rows()
                .map(|row| row.iter().map(|&cell| u8::from(cell)).collect::<Vec<_>>()),
        )
    }
}

/// Largest vertex count a [`GraphStore`] accepts.
///
/// The matrix holds `vertex_count * vertex_count` cells, so this caps it at
/// 2^30 cells.
pub const MAX_VERTICES: usize = 1 << 15;

/// Undirected graph over vertices `0..vertex_count`
#[derive(Debug, Clone)]
pub struct GraphStore {
    vertex_count: usize,
    matrix: AdjacencyMatrix,
    adjacency: AdjacencyList,
    edge_insertions: usize,
}

impl GraphStore {
    /// Create an edgeless graph with `1..=MAX_VERTICES` vertices
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(GraphError::InvalidVertexCount(vertex_count));
        }
        if vertex_count > MAX_VERTICES {
            return Err(GraphError::TooManyVertices {
                vertex_count,
                max: MAX_VERTICES,
            });
        }

        Ok(Self {
            vertex_count,
            matrix: AdjacencyMatrix::new(vertex_count),
            adjacency: AdjacencyList::new(),
            edge_insertions: 0,
        })
    }

    /// Build a graph and insert every edge in order
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(vertex_count)?;
        for (origin, destination) in edges {
            graph.add_edge(origin, destination)?;
        }
        Ok(graph)
    }

    /// Insert the undirected edge `(origin, destination)`.
    ///
    /// Both endpoints are checked before anything is written, so a rejected
    /// edge leaves the graph unchanged. Inserting the same pair again appends
    /// the neighbors again; the matrix cells stay set.
    pub fn add_edge(&mut self, origin: usize, destination: usize) -> Result<()> {
        ensure_vertex!(origin, self.vertex_count);
        ensure_vertex!(destination, self.vertex_count);

        self.matrix.set(origin, destination);
        self.matrix.set(destination, origin);
        self.adjacency.entry(origin).or_default().push(destination);
        self.adjacency.entry(destination).or_default().push(origin);
        self.edge_insertions += 1;

        trace!(origin, destination, "add_edge");
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of successful `add_edge` calls, duplicates included
    pub fn edge_insertions(&self) -> usize {
        self.edge_insertions
    }

    /// Read-only view of the adjacency matrix
    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    /// Read-only view of the adjacency list
    pub fn adjacency(&self) -> &AdjacencyList {
        &self.adjacency
    }

    /// Neighbors of `vertex` in insertion order; empty when it has no edges
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        self.adjacency
            .get(&vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn has_edge(&self, origin: usize, destination: usize) -> bool {
        self.matrix.get(origin, destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_graph_is_empty() {
        let graph = GraphStore::new(4).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.matrix().size(), 4);
        assert!(graph.matrix().rows().all(|row| row.iter().all(|c| !c)));
        assert!(graph.adjacency().is_empty());
        assert!(graph.neighbors(2).is_empty());
    }

    #[test]
    fn test_zero_vertices_rejected() {
        let err = GraphStore::new(0).unwrap_err();
        assert!(matches!(err, GraphError::InvalidVertexCount(0)));
    }

    #[test]
    fn test_oversized_vertex_count_rejected() {
        for vertex_count in [MAX_VERTICES + 1, 1 << 32, usize::MAX] {
            let err = GraphStore::new(vertex_count).unwrap_err();
            assert!(
                matches!(err, GraphError::TooManyVertices { max: MAX_VERTICES, .. }),
                "vertex_count {}",
                vertex_count
            );
        }
    }

    #[test]
    fn test_add_edge_updates_both_representations() {
        let mut graph = GraphStore::new(3).unwrap();
        graph.add_edge(0, 2).unwrap();

        assert!(graph.has_edge(0, 2));
        assert!(graph.has_edge(2, 0));
        assert!(!graph.has_edge(0, 1));
        assert_eq!(graph.neighbors(0), &[2]);
        assert_eq!(graph.neighbors(2), &[0]);
        // vertex 1 has no edges, so no entry at all
        assert!(!graph.adjacency().contains_key(&1));
    }

    #[test]
    fn test_duplicate_edge_duplicates_list_entries() {
        let mut graph = GraphStore::new(2).unwrap();
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 1).unwrap();

        assert_eq!(graph.neighbors(0), &[1, 1]);
        assert_eq!(graph.neighbors(1), &[0, 0]);
        assert!(graph.has_edge(0, 1));
        assert_eq!(graph.edge_insertions(), 2);
    }

    #[test]
    fn test_self_loop() {
        let mut graph = GraphStore::new(2).unwrap();
        graph.add_edge(1, 1).unwrap();

        assert!(graph.has_edge(1, 1));
        assert_eq!(graph.neighbors(1), &[1, 1]);
    }

    #[test]
    fn test_out_of_range_edge_leaves_graph_unchanged() {
        let mut graph = GraphStore::new(3).unwrap();
        graph.add_edge(0, 1).unwrap();

        let err = graph.add_edge(1, 3).unwrap_err();
        assert!(matches!(
            err,
            GraphError::VertexOutOfRange {
                vertex: 3,
                vertex_count: 3
            }
        ));
        assert_eq!(graph.neighbors(1), &[0]);
        assert_eq!(graph.edge_insertions(), 1);
    }

    #[test]
    fn test_matrix_stays_symmetric() {
        let edges = [(0, 1), (1, 2), (2, 3), (3, 4), (0, 4), (2, 2), (1, 3), (1, 3)];
        let graph = GraphStore::from_edges(5, edges).unwrap();

        for i in 0..5 {
            for j in 0..5 {
                assert_eq!(graph.matrix().get(i, j), graph.matrix().get(j, i));
            }
        }
    }

    #[test]
    fn test_adjacency_keeps_insertion_order() {
        let graph = GraphStore::from_edges(5, [(0, 3), (0, 1), (0, 4)]).unwrap();
        assert_eq!(graph.neighbors(0), &[3, 1, 4]);
    }

    #[test]
    fn test_matrix_serializes_as_rows() {
        let graph = GraphStore::from_edges(3, [(0, 1)]).unwrap();
        let json = serde_json::to_value(graph.matrix()).unwrap();
        assert_eq!(json, serde_json::json!([[0, 1, 0], [1, 0, 0], [0, 0, 0]]));
    }
}
