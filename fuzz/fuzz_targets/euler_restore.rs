#![no_main]

//! Whatever the outcome, an Eulerian search hands the graph back unchanged.

use graphwalk_core::{Graph, eulerian_circuits, eulerian_path};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&size, edges)) = data.split_first() else {
        return;
    };
    let n = usize::from(size % 6) + 1;
    let Ok(mut graph) = Graph::new(n) else {
        return;
    };
    // Cap the edge count so the exhaustive search stays fast.
    for pair in edges.chunks_exact(2).take(10) {
        let _ = graph.insert_edge(usize::from(pair[0]) % n, usize::from(pair[1]) % n);
    }
    let before = graph.clone();

    let src = usize::from(size / 6) % n;
    let dest = usize::from(size / 36) % n;
    assert!(eulerian_path(&mut graph, src, dest).is_ok());
    assert_eq!(graph, before);
    assert!(eulerian_circuits(&mut graph).is_ok());
    assert_eq!(graph, before);
});
