//! `gw components`: connected components with edge direction ignored.

use anyhow::Result;
use clap::Args;
use graphwalk_core::{Graph, Vertex, connected_components};
use serde::Serialize;

use crate::output::{OutputMode, join_vertices, pretty_kv, pretty_section, render_mode};

/// Arguments for `gw components`.
#[derive(Args, Debug, Default)]
pub struct ComponentsArgs {}

#[derive(Debug, Serialize)]
struct ComponentsOutput {
    count: usize,
    /// Members of each component, numbered by smallest vertex.
    components: Vec<Vec<Vertex>>,
    /// Component id of each vertex.
    labels: Vec<usize>,
}

/// Execute `gw components`.
pub fn run_components(_args: &ComponentsArgs, graph: &Graph, output: OutputMode) -> Result<()> {
    let labels = connected_components(graph);
    let payload = ComponentsOutput {
        count: labels.count(),
        components: labels.groups(),
        labels: labels.labels().to_vec(),
    };

    render_mode(
        output,
        &payload,
        |p, w| {
            for (id, members) in p.components.iter().enumerate() {
                writeln!(w, "{id}: {}", join_vertices(members))?;
            }
            Ok(())
        },
        |p, w| {
            pretty_section(w, "Connected components")?;
            pretty_kv(w, "Count", p.count.to_string())?;
            for (id, members) in p.components.iter().enumerate() {
                writeln!(w, "  [{id}] {{{}}}", join_vertices(members).replace(' ', ", "))?;
            }
            Ok(())
        },
    )
}
