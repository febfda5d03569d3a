//! Plain-text graph files.
//!
//! ```text
//! # comments and blank lines are ignored
//! 4          # vertex count
//! 0 1        # edge 0 -> 1
//! 1->2
//! 2-3
//! 3,0
//! ```
//!
//! The first non-blank line is the vertex count; every later line is one
//! edge. A duplicate edge is skipped with a warning. Anything else that does
//! not parse, including an out-of-range vertex, fails with the line number.

use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use graphwalk_core::{Adjacency, Edge, Graph, GraphError, Vertex};
use serde::Serialize;

/// A parsed graph plus the duplicate edges that were dropped.
#[derive(Debug)]
pub struct LoadedGraph {
    pub graph: Graph,
    pub skipped: Vec<SkippedEdge>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkippedEdge {
    pub line: usize,
    pub edge: Edge,
}

/// Read a graph from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_graph(
    path: Option<&Path>,
    undirected: bool,
    max_vertices: usize,
) -> Result<LoadedGraph> {
    let (text, source) = match path {
        Some(p) if p != Path::new("-") => (
            std::fs::read_to_string(p)
                .with_context(|| format!("Failed to read graph file {}", p.display()))?,
            p.display().to_string(),
        ),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read graph from stdin")?;
            (buf, "<stdin>".to_string())
        }
    };
    parse_graph(&text, undirected, max_vertices)
        .with_context(|| format!("Invalid graph in {source}"))
}

/// Parse graph-file text. A vertex count above `max_vertices` is rejected
/// before the matrix is allocated.
pub fn parse_graph(text: &str, undirected: bool, max_vertices: usize) -> Result<LoadedGraph> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, raw)| (i + 1, strip_comment(raw)))
        .filter(|(_, line)| !line.is_empty());

    let (count_line, count_text) = lines
        .next()
        .ok_or_else(|| anyhow!("missing vertex count"))?;
    let vertex_count: usize = count_text.parse().with_context(|| {
        format!("line {count_line}: expected a vertex count, found `{count_text}`")
    })?;
    ensure_loadable(vertex_count, max_vertices).with_context(|| format!("line {count_line}"))?;
    let mut graph = Graph::new(vertex_count).with_context(|| format!("line {count_line}"))?;

    let mut skipped = Vec::new();
    for (line, text) in lines {
        let (v, w) = parse_edge(text)
            .ok_or_else(|| anyhow!("line {line}: expected an edge like `0 1`, found `{text}`"))?;
        let inserted = if undirected {
            graph.insert_undirected(v, w)
        } else {
            graph.insert_edge(v, w)
        };
        match inserted {
            Ok(()) => {}
            Err(GraphError::EdgeExists(edge)) => {
                tracing::warn!(line, %edge, "skipping duplicate edge");
                skipped.push(SkippedEdge { line, edge });
            }
            Err(err) => return Err(err).with_context(|| format!("line {line}")),
        }
    }

    tracing::debug!(
        vertex_count,
        edge_count = graph.edge_count(),
        skipped = skipped.len(),
        undirected,
        "parsed graph file"
    );
    Ok(LoadedGraph { graph, skipped })
}

fn strip_comment(raw: &str) -> &str {
    raw.split_once('#').map_or(raw, |(before, _)| before).trim()
}

/// Accepts `v w`, `v->w`, `v-w` and `v,w`.
fn parse_edge(text: &str) -> Option<(Vertex, Vertex)> {
    let (from, to) = if let Some(pair) = text.split_once("->") {
        pair
    } else if let Some(pair) = text.split_once(',') {
        pair
    } else if let Some(pair) = text.split_once('-') {
        pair
    } else {
        let mut parts = text.split_whitespace();
        let pair = (parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }
        pair
    };
    Some((from.trim().parse().ok()?, to.trim().parse().ok()?))
}

/// Write `graph` in graph-file format, one `v w` edge per line.
pub fn write_graph(graph: &Graph, header: Option<&str>, w: &mut dyn Write) -> io::Result<()> {
    if let Some(header) = header {
        writeln!(w, "# {header}")?;
    }
    writeln!(w, "{}", graph.vertex_count())?;
    for edge in graph.edges() {
        writeln!(w, "{} {}", edge.from, edge.to)?;
    }
    Ok(())
}

/// Fail unless a graph of `vertex_count` vertices may be built at all.
pub fn ensure_loadable(vertex_count: usize, max_vertices: usize) -> Result<()> {
    if vertex_count > max_vertices {
        bail!(
            "vertex count {vertex_count} exceeds the limit of {max_vertices} (raise [limits] max_graph_vertices)"
        );
    }
    Ok(())
}

/// Fail unless `vertex_count` fits the configured rendering limit.
pub fn ensure_within_limit(vertex_count: usize, max_vertices: usize) -> Result<()> {
    if vertex_count > max_vertices {
        bail!(
            "graph has {vertex_count} vertices; rendering is limited to {max_vertices} (raise [limits] max_vertices)"
        );
    }
    Ok(())
}
