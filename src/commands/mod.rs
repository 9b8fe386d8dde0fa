//! Command implementations for adjgraph

pub mod bfs;
pub mod dfs;
pub mod dispatch;
pub mod format;
pub mod run;
pub mod show;
