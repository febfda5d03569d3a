//! `gw show`: print the graph as adjacency lists, optionally as a matrix.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use graphwalk_core::{Adjacency, Graph, Vertex};
use serde::Serialize;

use super::{write_matrix_pretty, write_matrix_text};
use crate::graph_file::ensure_within_limit;
use crate::output::{OutputMode, join_vertices, pretty_kv, pretty_section, render_mode};

/// Arguments for `gw show`.
#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// Also print the adjacency matrix.
    #[arg(long)]
    pub matrix: bool,
}

#[derive(Debug, Serialize)]
struct ShowOutput {
    vertex_count: usize,
    edge_count: usize,
    /// Out-neighbors of each vertex, indexed by vertex.
    adjacency: Vec<Vec<Vertex>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    matrix: Option<Vec<Vec<bool>>>,
}

/// Execute `gw show`.
pub fn run_show(
    args: &ShowArgs,
    graph: &Graph,
    max_vertices: usize,
    output: OutputMode,
) -> Result<()> {
    let n = graph.vertex_count();
    let matrix = if args.matrix {
        ensure_within_limit(n, max_vertices)?;
        Some(
            (0..n)
                .map(|v| (0..n).map(|w| graph.has_edge(v, w)).collect())
                .collect(),
        )
    } else {
        None
    };

    let payload = ShowOutput {
        vertex_count: n,
        edge_count: graph.edge_count(),
        adjacency: (0..n).map(|v| graph.neighbors(v).collect()).collect(),
        matrix,
    };

    render_mode(output, &payload, render_text, render_pretty)
}

fn render_text(payload: &ShowOutput, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "vertices {}", payload.vertex_count)?;
    writeln!(w, "edges {}", payload.edge_count)?;
    for (v, out) in payload.adjacency.iter().enumerate() {
        if out.is_empty() {
            writeln!(w, "{v}:")?;
        } else {
            writeln!(w, "{v}: {}", join_vertices(out))?;
        }
    }
    if let Some(ref matrix) = payload.matrix {
        write_matrix_text(matrix, w)?;
    }
    Ok(())
}

fn render_pretty(payload: &ShowOutput, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Graph")?;
    pretty_kv(w, "Vertices", payload.vertex_count.to_string())?;
    pretty_kv(w, "Edges", payload.edge_count.to_string())?;
    writeln!(w)?;

    pretty_section(w, "Adjacency")?;
    for (v, out) in payload.adjacency.iter().enumerate() {
        if out.is_empty() {
            writeln!(w, "  {v} → (none)")?;
        } else {
            writeln!(w, "  {v} → {}", join_vertices(out))?;
        }
    }

    if let Some(ref matrix) = payload.matrix {
        writeln!(w)?;
        pretty_section(w, "Matrix")?;
        write_matrix_pretty(matrix, w)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(matrix: bool) -> ShowOutput {
        ShowOutput {
            vertex_count: 3,
            edge_count: 2,
            adjacency: vec![vec![1, 2], vec![], vec![]],
            matrix: matrix.then(|| {
                vec![
                    vec![false, true, true],
                    vec![false, false, false],
                    vec![false, false, false],
                ]
            }),
        }
    }

    #[test]
    fn text_lists_neighbors_per_vertex() {
        let mut buf = Vec::new();
        render_text(&payload(false), &mut buf).expect("render");
        assert_eq!(
            String::from_utf8(buf).expect("utf8"),
            "vertices 3\nedges 2\n0: 1 2\n1:\n2:\n"
        );
    }

    #[test]
    fn pretty_marks_vertices_without_edges() {
        let mut buf = Vec::new();
        render_pretty(&payload(true), &mut buf).expect("render");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("0 → 1 2"));
        assert!(text.contains("1 → (none)"));
        assert!(text.contains("Matrix"));
    }

    #[test]
    fn json_omits_matrix_unless_requested() {
        let json = serde_json::to_value(payload(false)).expect("serialize");
        assert!(json.get("matrix").is_none());
        assert_eq!(json["adjacency"][0], serde_json::json!([1, 2]));
    }

    #[test]
    fn matrix_wider_than_limit_is_refused() {
        let graph = Graph::new(4).expect("graph");
        let args = ShowArgs { matrix: true };
        assert!(run_show(&args, &graph, 3, OutputMode::Json).is_err());
    }
}
