#![no_main]

//! Random insert/remove sequences must keep the incremental edge count in
//! step with the matrix, and no query may panic on any vertex index.

use graphwalk_core::{
    Graph, bfs_order, connected_components, dfs_order, has_cycle, reachable_path,
    transitive_closure,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&size, ops)) = data.split_first() else {
        return;
    };
    let n = usize::from(size % 12) + 1;
    let Ok(mut graph) = Graph::new(n) else {
        return;
    };

    for chunk in ops.chunks_exact(3) {
        // Indices may exceed n on purpose.
        let v = usize::from(chunk[1] % 16);
        let w = usize::from(chunk[2] % 16);
        let _ = if chunk[0] % 2 == 0 {
            graph.insert_edge(v, w)
        } else {
            graph.remove_edge(v, w)
        };
        assert_eq!(graph.edge_count(), graph.recount_edges());

        let _ = dfs_order(&graph, v);
        let _ = bfs_order(&graph, w);
        let _ = reachable_path(&graph, v, w);
    }

    let _ = has_cycle(&graph);
    let labels = connected_components(&graph);
    assert!(labels.count() >= 1 && labels.count() <= n);
    let closure = transitive_closure(&graph);
    assert_eq!(transitive_closure(&closure), closure);
});
