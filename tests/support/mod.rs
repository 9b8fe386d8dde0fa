use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for adjgraph with logging filters cleared from the environment
pub fn adjgraph() -> Command {
    let mut cmd = cargo_bin_cmd!("adjgraph");
    cmd.env_remove("RUST_LOG")
        .env_remove("ADJGRAPH_LOG")
        .env_remove("ADJGRAPH_LOG_LEVEL");
    cmd
}

/// Write an edge-list file under `dir` and return its path
pub fn write_edges(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Edge list for the 5-cycle 0-1-2-3-4-0
#[allow(dead_code)]
pub const FIVE_CYCLE: &str = "0 1\n1 2\n2 3\n3 4\n0 4\n";
