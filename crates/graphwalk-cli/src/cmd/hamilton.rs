//! `gw hamilton`: Hamiltonian path between two vertices, or every
//! Hamiltonian circuit.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use graphwalk_core::{Graph, Vertex, hamiltonian_circuits, hamiltonian_path};
use serde::Serialize;

use crate::output::{OutputMode, join_vertices, join_walk, pretty_kv, pretty_section, render_mode};

/// Arguments for `gw hamilton`.
#[derive(Args, Debug)]
pub struct HamiltonArgs {
    /// Source vertex.
    #[arg(required_unless_present = "circuit", requires = "dest")]
    pub src: Option<Vertex>,
    /// Destination vertex.
    #[arg(required_unless_present = "circuit")]
    pub dest: Option<Vertex>,
    /// List every Hamiltonian circuit instead.
    #[arg(long, conflicts_with_all = ["src", "dest"])]
    pub circuit: bool,
}

#[derive(Debug, Serialize)]
struct PathOutput {
    src: Vertex,
    dest: Vertex,
    path: Option<Vec<Vertex>>,
}

#[derive(Debug, Serialize)]
struct CircuitsOutput {
    count: usize,
    circuits: Vec<Vec<Vertex>>,
}

/// Execute `gw hamilton`.
pub fn run_hamilton(args: &HamiltonArgs, graph: &Graph, output: OutputMode) -> Result<()> {
    match (args.src, args.dest) {
        (Some(src), Some(dest)) if !args.circuit => run_path(graph, src, dest, output),
        _ => run_circuits(graph, output),
    }
}

fn run_path(graph: &Graph, src: Vertex, dest: Vertex, output: OutputMode) -> Result<()> {
    let payload = PathOutput {
        src,
        dest,
        path: hamiltonian_path(graph, src, dest)?,
    };

    render_mode(
        output,
        &payload,
        |p, w| match p.path {
            Some(ref path) => writeln!(w, "{}", join_vertices(path)),
            None => writeln!(w, "none"),
        },
        |p, w| match p.path {
            Some(ref path) => {
                writeln!(w, "✓ Hamiltonian path from {} to {}", p.src, p.dest)?;
                pretty_kv(w, "Path", join_walk(path))
            }
            None => writeln!(w, "No Hamiltonian path from {} to {}", p.src, p.dest),
        },
    )
}

fn run_circuits(graph: &Graph, output: OutputMode) -> Result<()> {
    let circuits = hamiltonian_circuits(graph);
    let payload = CircuitsOutput {
        count: circuits.len(),
        circuits,
    };

    render_mode(
        output,
        &payload,
        |p, w| write_walk_lines(&p.circuits, w),
        |p, w| {
            if p.circuits.is_empty() {
                return writeln!(w, "No Hamiltonian circuit");
            }
            pretty_section(w, "Hamiltonian circuits")?;
            pretty_kv(w, "Found", p.count.to_string())?;
            for circuit in &p.circuits {
                writeln!(w, "  {}", join_walk(circuit))?;
            }
            Ok(())
        },
    )
}

/// One walk per line; `none` when there are no walks.
pub fn write_walk_lines(walks: &[Vec<Vertex>], w: &mut dyn Write) -> std::io::Result<()> {
    if walks.is_empty() {
        return writeln!(w, "none");
    }
    for walk in walks {
        writeln!(w, "{}", join_vertices(walk))?;
    }
    Ok(())
}
