//! `gw cycle`: cycle check from vertex 0.

use anyhow::Result;
use clap::Args;
use graphwalk_core::{Graph, has_cycle};
use serde::Serialize;

use crate::output::{OutputMode, render_mode};

/// Arguments for `gw cycle`.
#[derive(Args, Debug, Default)]
pub struct CycleArgs {}

#[derive(Debug, Serialize)]
struct CycleOutput {
    has_cycle: bool,
    /// The walk always starts here; unreachable cycles are not reported.
    start: usize,
}

/// Execute `gw cycle`.
pub fn run_cycle(_args: &CycleArgs, graph: &Graph, output: OutputMode) -> Result<()> {
    let payload = CycleOutput {
        has_cycle: has_cycle(graph),
        start: 0,
    };

    render_mode(
        output,
        &payload,
        |p, w| writeln!(w, "{}", if p.has_cycle { "cycle" } else { "no cycle" }),
        |p, w| {
            if p.has_cycle {
                writeln!(w, "✓ Cycle found reachable from vertex {}", p.start)
            } else {
                writeln!(w, "No cycle reachable from vertex {}", p.start)
            }
        },
    )
}
