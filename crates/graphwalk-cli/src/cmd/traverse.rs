//! `gw dfs` / `gw bfs`: walk order from a start vertex.
//!
//! Pretty DFS output draws the depth-first tree:
//!
//! ```text
//! 0
//! ├── 1
//! │   └── 3
//! └── 2
//! ```

use std::fmt::Write as FmtWrite;

use anyhow::Result;
use clap::Args;
use graphwalk_core::{DfsTree, Graph, Vertex, bfs_order, dfs_tree};
use serde::Serialize;

use crate::output::{OutputMode, join_vertices, pretty_kv, pretty_section, render_mode};

/// Arguments for `gw dfs` and `gw bfs`.
#[derive(Args, Debug)]
pub struct WalkArgs {
    /// Start vertex.
    pub start: Vertex,
}

#[derive(Debug, Serialize)]
struct TreeEdge {
    parent: Vertex,
    child: Vertex,
}

#[derive(Debug, Serialize)]
struct DfsOutput {
    start: Vertex,
    order: Vec<Vertex>,
    /// Tree edges in discovery order.
    tree: Vec<TreeEdge>,
    #[serde(skip)]
    diagram: String,
}

#[derive(Debug, Serialize)]
struct BfsOutput {
    start: Vertex,
    order: Vec<Vertex>,
}

/// Execute `gw dfs`.
pub fn run_dfs(args: &WalkArgs, graph: &Graph, output: OutputMode) -> Result<()> {
    let tree = dfs_tree(graph, args.start)?;
    let payload = DfsOutput {
        start: tree.root,
        tree: tree
            .order
            .iter()
            .filter_map(|&child| {
                tree.parents
                    .get(child)
                    .map(|parent| TreeEdge { parent, child })
            })
            .collect(),
        diagram: draw_tree(&tree),
        order: tree.order,
    };

    render_mode(
        output,
        &payload,
        |p, w| writeln!(w, "{}", join_vertices(&p.order)),
        |p, w| {
            pretty_section(w, &format!("Depth-first walk from {}", p.start))?;
            write!(w, "{}", p.diagram)?;
            writeln!(w)?;
            pretty_kv(w, "Order", join_vertices(&p.order))?;
            pretty_kv(w, "Reached", format!("{} vertices", p.order.len()))
        },
    )
}

/// Execute `gw bfs`.
pub fn run_bfs(args: &WalkArgs, graph: &Graph, output: OutputMode) -> Result<()> {
    let payload = BfsOutput {
        start: args.start,
        order: bfs_order(graph, args.start)?,
    };

    render_mode(
        output,
        &payload,
        |p, w| writeln!(w, "{}", join_vertices(&p.order)),
        |p, w| {
            pretty_section(w, &format!("Breadth-first walk from {}", p.start))?;
            pretty_kv(w, "Order", join_vertices(&p.order))?;
            pretty_kv(w, "Reached", format!("{} vertices", p.order.len()))
        },
    )
}

fn draw_tree(tree: &DfsTree) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tree.root);
    draw_children(tree, tree.root, "", &mut out);
    out
}

fn draw_children(tree: &DfsTree, parent: Vertex, prefix: &str, out: &mut String) {
    let children = tree.children(parent);
    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { "└── " } else { "├── " };
        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let _ = writeln!(out, "{prefix}{connector}{child}");
        draw_children(tree, child, &child_prefix, out);
    }
}
