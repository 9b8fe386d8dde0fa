use adjgraph_core::graph::{AdjacencyList, AdjacencyMatrix, DfsResult, PathResult};

/// Join vertex ids with single spaces
pub fn join_ids(ids: &[usize]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_matrix_row(row: &[bool]) -> String {
    row.iter()
        .map(|&cell| if cell { "1" } else { "0" })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_matrix(matrix: &AdjacencyMatrix) {
    for row in matrix.rows() {
        println!("{}", format_matrix_row(row));
    }
}

pub fn print_adjacency(adjacency: &AdjacencyList) {
    for (vertex, neighbors) in adjacency {
        println!("{}: {}", vertex, join_ids(neighbors));
    }
}

/// Note for an edge list whose reading ended before end of file
pub fn format_truncation(line: usize) -> String {
    format!("Edge list ended at line {}; later lines were not read.", line)
}

pub fn format_path(result: &PathResult) -> String {
    if result.found {
        format!(
            "path between {} and {}: {}",
            result.from,
            result.to,
            join_ids(&result.path)
        )
    } else {
        format!("no path between {} and {}", result.from, result.to)
    }
}

pub fn format_dfs(result: &DfsResult) -> String {
    join_ids(&result.order)
}
