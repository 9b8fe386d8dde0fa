//! Adjgraph Core Library
//!
//! Undirected graph storage with synchronized adjacency matrix and adjacency
//! list views, BFS path queries and DFS enumeration, plus the edge-list
//! loader and instance manifest used by the `adjgraph` CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod loader;
pub mod logging;
