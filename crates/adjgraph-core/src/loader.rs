//! Edge-list loading
//!
//! An edge-list file holds one undirected edge per line as two
//! whitespace-separated vertex ids: `origin destination`. Reading stops at the
//! first line that does not start with two non-negative integers; a blank
//! line therefore acts as an end-of-edges marker. Edges read before that line
//! are kept. A read error mid-file ends reading the same way.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use tracing::{debug, warn};

use crate::error::Result;
use crate::graph::GraphStore;
use crate::trace_time;

/// Edges read from an edge-list source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedEdges {
    pub edges: Vec<(usize, usize)>,
    /// 1-based line number that ended parsing early, if any
    pub stopped_at_line: Option<usize>,
}

/// A graph built from an edge-list file
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    pub graph: GraphStore,
    pub edges_read: usize,
    /// The file could not be opened and the graph was left without edges
    pub file_missing: bool,
    /// Line that ended reading before end of file; later lines were ignored
    pub stopped_at_line: Option<usize>,
}

/// Read one vertex id: optional leading whitespace, optional `+`, then the
/// longest run of ASCII digits. Returns the id and the unread remainder.
fn leading_id(input: &[u8]) -> Option<(usize, &[u8])> {
    let start = input.iter().position(|b| !b.is_ascii_whitespace())?;
    let rest = &input[start..];
    let rest = rest.strip_prefix(b"+").unwrap_or(rest);
    let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    let id = std::str::from_utf8(&rest[..digits]).ok()?.parse().ok()?;
    Some((id, &rest[digits..]))
}

/// Parse the leading `origin destination` pair of a line.
///
/// Anything after the second id is ignored, so `1 2x` still reads as the
/// edge `(1, 2)` while `1x 2` does not.
fn parse_edge_line(line: &[u8]) -> Option<(usize, usize)> {
    let (origin, rest) = leading_id(line)?;
    let (destination, _) = leading_id(rest)?;
    Some((origin, destination))
}

/// Read edges until end of input, the first malformed line or a read error
pub fn parse_edges<R: BufRead>(mut reader: R) -> ParsedEdges {
    let mut parsed = ParsedEdges::default();
    let mut line = Vec::new();
    let mut line_number = 0;

    loop {
        line.clear();
        line_number += 1;
        match reader.read_until(b'\n', &mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                warn!(line = line_number, error = %e, "edge list read failed, keeping edges read so far");
                parsed.stopped_at_line = Some(line_number);
                break;
            }
        }

        match parse_edge_line(&line) {
            Some(edge) => parsed.edges.push(edge),
            None => {
                parsed.stopped_at_line = Some(line_number);
                break;
            }
        }
    }

    parsed
}

/// Load an edge-list file into a graph with `vertex_count` vertices.
///
/// A file that cannot be opened yields an edgeless graph rather than an
/// error. Edges referencing a vertex outside the graph are rejected.
pub fn load_graph(path: &Path, vertex_count: usize) -> Result<LoadedGraph> {
    let start = Instant::now();
    let mut graph = GraphStore::new(vertex_count)?;

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot open edge list, continuing without edges");
            return Ok(LoadedGraph {
                graph,
                edges_read: 0,
                file_missing: true,
                stopped_at_line: None,
            });
        }
    };

    let parsed = parse_edges(BufReader::new(file));
    if let Some(line) = parsed.stopped_at_line {
        debug!(path = %path.display(), line, "edge list ended at non-edge line");
    }

    for &(origin, destination) in &parsed.edges {
        graph.add_edge(origin, destination)?;
    }

    trace_time!(start, "load_graph");
    debug!(
        path = %path.display(),
        vertex_count,
        edges = parsed.edges.len(),
        "load_graph"
    );

    Ok(LoadedGraph {
        graph,
        edges_read: parsed.edges.len(),
        file_missing: false,
        stopped_at_line: parsed.stopped_at_line,
    })
}
