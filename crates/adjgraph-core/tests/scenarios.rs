//! End-to-end scenarios over the public graph API

use std::fs;

use adjgraph_core::graph::{bfs_find_path, dfs_order, GraphStore};
use adjgraph_core::loader::load_graph;
use tempfile::tempdir;

#[test]
fn test_five_cycle_scenario() {
    let graph = GraphStore::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (0, 4)]).unwrap();

    let path = bfs_find_path(&graph, 0, 4).unwrap();
    assert!(path.found);
    assert_eq!(path.path_length, 1);
    assert_eq!(path.path, vec![0, 4]);

    let mut order = dfs_order(&graph, 0).unwrap().order;
    assert_eq!(order.len(), 5);
    order.sort_unstable();
    assert_eq!(order, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_empty_edge_set_scenario() {
    let graph = GraphStore::new(4).unwrap();

    assert!(graph
        .matrix()
        .rows()
        .all(|row| row.iter().all(|&cell| !cell)));
    assert!(graph.adjacency().is_empty());
    assert!(!bfs_find_path(&graph, 0, 3).unwrap().found);
    assert_eq!(dfs_order(&graph, 0).unwrap().order, vec![0]);
}

#[test]
fn test_loaded_file_drives_traversals() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.txt");
    // Edges after the blank line are never read
    fs::write(&path, "0 1\n1 2\n2 3\n3 4\n5 6\n\n0 4\n").unwrap();

    let loaded = load_graph(&path, 7).unwrap();
    assert_eq!(loaded.edges_read, 5);
    assert_eq!(loaded.stopped_at_line, Some(6));

    let graph = &loaded.graph;
    let path = bfs_find_path(graph, 0, 4).unwrap();
    assert_eq!(path.path, vec![0, 1, 2, 3, 4]);
    assert_eq!(path.path_length, 4);

    assert!(!bfs_find_path(graph, 0, 6).unwrap().found);
    assert_eq!(dfs_order(graph, 0).unwrap().order, vec![0, 1, 2, 3, 4]);
    assert_eq!(dfs_order(graph, 6).unwrap().order, vec![6, 5]);
}
