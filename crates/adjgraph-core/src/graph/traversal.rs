use crate::graph::store::GraphStore;

/// Trait for providing read-only adjacency to traversal algorithms
pub trait GraphProvider {
    fn vertex_count(&self) -> usize;
    fn neighbors(&self, vertex: usize) -> &[usize];
}

impl GraphProvider for GraphStore {
    fn vertex_count(&self) -> usize {
        GraphStore::vertex_count(self)
    }

    fn neighbors(&self, vertex: usize) -> &[usize] {
        GraphStore::neighbors(self, vertex)
    }
}
