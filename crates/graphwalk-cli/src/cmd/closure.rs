//! `gw closure`: transitive closure as a reachability matrix.

use anyhow::Result;
use clap::Args;
use graphwalk_core::{Adjacency, Graph, transitive_closure};
use serde::Serialize;

use super::{write_matrix_pretty, write_matrix_text};
use crate::graph_file::ensure_within_limit;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `gw closure`.
#[derive(Args, Debug, Default)]
pub struct ClosureArgs {}

#[derive(Debug, Serialize)]
struct ClosureOutput {
    vertex_count: usize,
    /// Number of ordered pairs `(j, k)` with a path of one or more edges.
    reachable_pairs: usize,
    matrix: Vec<Vec<bool>>,
}

/// Execute `gw closure`.
pub fn run_closure(
    _args: &ClosureArgs,
    graph: &Graph,
    max_vertices: usize,
    output: OutputMode,
) -> Result<()> {
    ensure_within_limit(graph.vertex_count(), max_vertices)?;
    let closure = transitive_closure(graph);
    let payload = ClosureOutput {
        vertex_count: closure.vertex_count(),
        reachable_pairs: closure.pair_count(),
        matrix: closure.to_rows(),
    };

    render_mode(
        output,
        &payload,
        |p, w| write_matrix_text(&p.matrix, w),
        |p, w| {
            pretty_section(w, "Transitive closure")?;
            pretty_kv(w, "Pairs", p.reachable_pairs.to_string())?;
            writeln!(w)?;
            write_matrix_pretty(&p.matrix, w)
        },
    )
}
