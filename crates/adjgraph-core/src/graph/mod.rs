//! Graph storage and traversal
//!
//! - `store`: adjacency matrix and adjacency list kept in sync
//! - `bfs`: breadth-first path query with predecessor reconstruction
//! - `dfs`: stack-based enumeration of a connected component
//! - `traversal`: provider trait the algorithms read through

pub mod bfs;
pub mod dfs;
pub mod store;
pub mod traversal;
pub mod types;

pub use bfs::bfs_find_path;
pub use dfs::dfs_order;
pub use store::{AdjacencyList, AdjacencyMatrix, GraphStore, MAX_VERTICES};
pub use traversal::GraphProvider;
pub use types::{DfsResult, PathResult};
