//! `gw path`: is `dest` reachable from `src`, and by which path.

use anyhow::Result;
use clap::Args;
use graphwalk_core::{Graph, Vertex, reachable_path};
use serde::Serialize;

use crate::output::{OutputMode, join_vertices, join_walk, pretty_kv, render_mode};

/// Arguments for `gw path`.
#[derive(Args, Debug)]
pub struct PathArgs {
    /// Source vertex.
    pub src: Vertex,
    /// Destination vertex.
    pub dest: Vertex,
}

#[derive(Debug, Serialize)]
struct PathOutput {
    src: Vertex,
    dest: Vertex,
    reachable: bool,
    path: Option<Vec<Vertex>>,
}

/// Execute `gw path`.
pub fn run_path(args: &PathArgs, graph: &Graph, output: OutputMode) -> Result<()> {
    let path = reachable_path(graph, args.src, args.dest)?;
    let payload = PathOutput {
        src: args.src,
        dest: args.dest,
        reachable: path.is_some(),
        path,
    };

    render_mode(
        output,
        &payload,
        |p, w| match p.path {
            Some(ref path) => writeln!(w, "{}", join_vertices(path)),
            None => writeln!(w, "unreachable"),
        },
        |p, w| match p.path {
            Some(ref path) => {
                writeln!(w, "✓ {} reaches {}", p.src, p.dest)?;
                pretty_kv(w, "Path", join_walk(path))?;
                pretty_kv(w, "Hops", (path.len() - 1).to_string())
            }
            None => writeln!(w, "No path from {} to {}", p.src, p.dest),
        },
    )
}
