//! `gw euler`: Eulerian path between two vertices, or Eulerian circuits.
//!
//! Degree is out-degree. For a graph meant as undirected, load it with
//! `--undirected` so every edge counts at both ends.

use anyhow::Result;
use clap::Args;
use graphwalk_core::{
    EulerOutcome, Graph, ParityViolation, Vertex, eulerian_circuits, eulerian_path,
};
use serde::Serialize;

use super::hamilton::write_walk_lines;
use crate::output::{OutputMode, join_vertices, join_walk, pretty_kv, pretty_section, render_mode};

/// Arguments for `gw euler`.
#[derive(Args, Debug)]
pub struct EulerArgs {
    /// Source vertex.
    #[arg(required_unless_present = "circuit", requires = "dest")]
    pub src: Option<Vertex>,
    /// Destination vertex.
    #[arg(required_unless_present = "circuit")]
    pub dest: Option<Vertex>,
    /// Search for Eulerian circuits instead.
    #[arg(long, conflicts_with_all = ["src", "dest"])]
    pub circuit: bool,
}

#[derive(Debug, Serialize)]
struct PathOutput {
    src: Vertex,
    dest: Vertex,
    outcome: EulerOutcome<Vec<Vertex>>,
}

#[derive(Debug, Serialize)]
struct CircuitsOutput {
    outcome: EulerOutcome<Vec<Vec<Vertex>>>,
}

/// Execute `gw euler`. The graph is borrowed mutably while edges are
/// consumed and is back in its loaded state afterwards.
pub fn run_euler(args: &EulerArgs, graph: &mut Graph, output: OutputMode) -> Result<()> {
    match (args.src, args.dest) {
        (Some(src), Some(dest)) if !args.circuit => run_path(graph, src, dest, output),
        _ => run_circuits(graph, output),
    }
}

fn run_path(graph: &mut Graph, src: Vertex, dest: Vertex, output: OutputMode) -> Result<()> {
    let payload = PathOutput {
        src,
        dest,
        outcome: eulerian_path(graph, src, dest)?,
    };

    render_mode(
        output,
        &payload,
        |p, w| match p.outcome {
            EulerOutcome::Found(ref walk) => writeln!(w, "{}", join_vertices(walk)),
            EulerOutcome::Violation(ref violation) => writeln!(w, "violation: {violation}"),
            EulerOutcome::Exhausted => writeln!(w, "none"),
        },
        |p, w| match p.outcome {
            EulerOutcome::Found(ref walk) => {
                writeln!(w, "✓ Eulerian path from {} to {}", p.src, p.dest)?;
                pretty_kv(w, "Path", join_walk(walk))?;
                pretty_kv(w, "Edges", (walk.len() - 1).to_string())
            }
            EulerOutcome::Violation(ref violation) => write_violation(violation, w),
            EulerOutcome::Exhausted => writeln!(
                w,
                "No Eulerian path from {} to {} (degrees allow one, but no walk covers every edge)",
                p.src, p.dest
            ),
        },
    )
}

fn run_circuits(graph: &mut Graph, output: OutputMode) -> Result<()> {
    let payload = CircuitsOutput {
        outcome: eulerian_circuits(graph)?,
    };

    render_mode(
        output,
        &payload,
        |p, w| match p.outcome {
            EulerOutcome::Found(ref circuits) => write_walk_lines(circuits, w),
            EulerOutcome::Violation(ref violation) => writeln!(w, "violation: {violation}"),
            EulerOutcome::Exhausted => writeln!(w, "none"),
        },
        |p, w| match p.outcome {
            EulerOutcome::Found(ref circuits) => {
                pretty_section(w, "Eulerian circuits")?;
                pretty_kv(w, "Found", circuits.len().to_string())?;
                for circuit in circuits {
                    writeln!(w, "  {}", join_walk(circuit))?;
                }
                Ok(())
            }
            EulerOutcome::Violation(ref violation) => write_violation(violation, w),
            EulerOutcome::Exhausted => writeln!(
                w,
                "No Eulerian circuit (degrees allow one, but no walk covers every edge)"
            ),
        },
    )
}

fn write_violation(violation: &ParityViolation, w: &mut dyn std::io::Write) -> std::io::Result<()> {
    writeln!(w, "✗ No Eulerian walk possible")?;
    pretty_kv(w, "Reason", violation.to_string())
}
