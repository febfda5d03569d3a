//! `gw random`: generate a random graph in graph-file format.

use std::num::NonZeroU32;

use anyhow::Result;
use clap::Args;
use graphwalk_core::{Adjacency, Graph, Vertex};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::graph_file::{ensure_loadable, write_graph};
use crate::output::{OutputMode, render};

/// Arguments for `gw random`.
#[derive(Args, Debug)]
pub struct RandomArgs {
    /// Number of vertices.
    pub vertices: usize,

    /// Each possible edge is present with probability 1/SPARSITY.
    #[arg(long, default_value = "2")]
    pub sparsity: NonZeroU32,

    /// Seed for reproducible output; omitted means a fresh random graph.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
struct RandomOutput {
    vertex_count: usize,
    edges: Vec<(Vertex, Vertex)>,
    #[serde(skip)]
    graph: Graph,
    #[serde(skip)]
    header: String,
}

/// Execute `gw random`.
pub fn run_random(
    args: &RandomArgs,
    max_graph_vertices: usize,
    output: OutputMode,
) -> Result<()> {
    ensure_loadable(args.vertices, max_graph_vertices)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let graph = Graph::random(args.vertices, args.sparsity, &mut rng)?;
    tracing::info!(seed, vertices = args.vertices, "generated random graph");

    let payload = RandomOutput {
        vertex_count: graph.vertex_count(),
        edges: graph.edges().map(|e| (e.from, e.to)).collect(),
        header: format!(
            "gw random {} --sparsity {} --seed {seed}",
            args.vertices, args.sparsity
        ),
        graph,
    };

    render(output, &payload, |p, w| {
        write_graph(&p.graph, Some(&p.header), w)
    })
}
