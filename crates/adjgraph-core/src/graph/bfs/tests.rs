use crate::error::GraphError;
use crate::graph::bfs::*;
use crate::graph::GraphStore;

/// All-pairs hop distances from the adjacency matrix (Floyd-Warshall)
fn hop_distances(graph: &GraphStore) -> Vec<Vec<Option<usize>>> {
    let n = graph.vertex_count();
    let mut dist = vec![vec![None; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = Some(0);
        for (j, cell) in row.iter_mut().enumerate() {
            if i != j && graph.has_edge(i, j) {
                *cell = Some(1);
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].is_none_or(|d| a + b < d) {
                        dist[i][j] = Some(a + b);
                    }
                }
            }
        }
    }
    dist
}

fn five_cycle() -> GraphStore {
    GraphStore::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (0, 4)]).unwrap()
}

#[test]
fn test_bfs_five_cycle_uses_direct_edge() {
    let graph = five_cycle();
    let result = bfs_find_path(&graph, 0, 4).unwrap();

    assert!(result.found);
    assert_eq!(result.path, vec![0, 4]);
    assert_eq!(result.path_length, 1);
}

#[test]
fn test_bfs_path_through_intermediate() {
    let graph = GraphStore::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
    let result = bfs_find_path(&graph, 0, 3).unwrap();

    assert_eq!(result.path, vec![0, 1, 2, 3]);
    assert_eq!(result.path_length, 3);
}

#[test]
fn test_bfs_tie_break_follows_insertion_order() {
    // Two 2-hop routes from 0 to 3: via 1 and via 2
    let via_one = GraphStore::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
    assert_eq!(bfs_find_path(&via_one, 0, 3).unwrap().path, vec![0, 1, 3]);

    let via_two = GraphStore::from_edges(4, [(0, 2), (0, 1), (1, 3), (2, 3)]).unwrap();
    assert_eq!(bfs_find_path(&via_two, 0, 3).unwrap().path, vec![0, 2, 3]);
}

#[test]
fn test_bfs_disconnected_reports_no_path() {
    let graph = GraphStore::from_edges(6, [(0, 1), (1, 2), (3, 4), (4, 5)]).unwrap();
    let result = bfs_find_path(&graph, 0, 5).unwrap();

    assert!(!result.found);
    assert!(result.path.is_empty());
}

#[test]
fn test_bfs_empty_graph_reports_no_path() {
    let graph = GraphStore::new(4).unwrap();
    let result = bfs_find_path(&graph, 0, 3).unwrap();
    assert!(!result.found);
}

#[test]
fn test_bfs_same_vertex_reports_no_path() {
    // The start vertex never gets a predecessor, even with a self loop
    let graph = GraphStore::from_edges(3, [(0, 1), (1, 1)]).unwrap();

    assert!(!bfs_find_path(&graph, 0, 0).unwrap().found);
    assert!(!bfs_find_path(&graph, 1, 1).unwrap().found);
}

#[test]
fn test_bfs_out_of_range_endpoints() {
    let graph = five_cycle();

    let err = bfs_find_path(&graph, 5, 0).unwrap_err();
    assert!(matches!(err, GraphError::VertexOutOfRange { vertex: 5, .. }));

    let err = bfs_find_path(&graph, 0, 9).unwrap_err();
    assert!(matches!(err, GraphError::VertexOutOfRange { vertex: 9, .. }));
}

#[test]
fn test_bfs_duplicate_edges_do_not_change_path() {
    let graph = GraphStore::from_edges(3, [(0, 1), (0, 1), (1, 2), (1, 2)]).unwrap();
    assert_eq!(bfs_find_path(&graph, 0, 2).unwrap().path, vec![0, 1, 2]);
}

#[test]
fn test_bfs_paths_are_shortest_and_adjacent() {
    let edges = [
        (0, 1),
        (0, 2),
        (1, 3),
        (2, 3),
        (3, 4),
        (4, 5),
        (2, 6),
        (6, 7),
        (7, 5),
        (5, 8),
        (1, 8),
        (9, 9),
    ];
    let graph = GraphStore::from_edges(10, edges).unwrap();
    let dist = hop_distances(&graph);

    for s in 0..10 {
        for t in 0..10 {
            if s == t {
                continue;
            }
            let result = bfs_find_path(&graph, s, t).unwrap();
            match dist[s][t] {
                Some(hops) => {
                    assert!(result.found, "expected path {} -> {}", s, t);
                    assert_eq!(result.path.first(), Some(&s));
                    assert_eq!(result.path.last(), Some(&t));
                    assert_eq!(result.path_length, hops);
                    for pair in result.path.windows(2) {
                        assert!(graph.neighbors(pair[0]).contains(&pair[1]));
                    }
                }
                None => assert!(!result.found, "unexpected path {} -> {}", s, t),
            }
        }
    }
}
