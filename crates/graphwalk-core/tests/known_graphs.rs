//! Known-topology regression tests.
//!
//! Each test builds a small hand-checked graph and asserts the exact output
//! of the public API, including visitation order, so any change to neighbor
//! ordering or backtracking shows up here.

use graphwalk_core::{
    EulerOutcome, Graph, GraphError, ParityViolation, Vertex, bfs_order, connected_components,
    dfs_order, dfs_tree, eulerian_circuits, eulerian_path, hamiltonian_circuits, hamiltonian_path,
    has_cycle, is_reachable, reachable_path, transitive_closure,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn directed(n: usize, edges: &[(Vertex, Vertex)]) -> Graph {
    Graph::from_edges(n, edges.iter().copied()).expect("valid graph")
}

fn undirected(n: usize, edges: &[(Vertex, Vertex)]) -> Graph {
    let mut g = Graph::new(n).expect("valid graph");
    for &(v, w) in edges {
        g.insert_undirected(v, w).expect("new edge");
    }
    g
}

fn square() -> Graph {
    undirected(4, &[(0, 1), (1, 2), (2, 3), (3, 0)])
}

// ---------------------------------------------------------------------------
// Directed triangle
// ---------------------------------------------------------------------------

#[test]
fn triangle_cycle_and_reachability() {
    let mut g = directed(3, &[(0, 1), (1, 2), (2, 0)]);
    assert!(has_cycle(&g));
    assert_eq!(is_reachable(&g, 2, 0), Ok(true));

    g.remove_edge(2, 0).expect("edge present");
    assert!(!has_cycle(&g));
    assert_eq!(is_reachable(&g, 2, 0), Ok(false));
    assert_eq!(is_reachable(&g, 0, 2), Ok(true));
    assert_eq!(reachable_path(&g, 0, 2), Ok(Some(vec![0, 1, 2])));
}

#[test]
fn triangle_closure_is_complete() {
    let g = directed(3, &[(0, 1), (1, 2), (2, 0)]);
    let closure = transitive_closure(&g);
    assert_eq!(closure.pair_count(), 9);
    assert!(closure.reaches(1, 1));
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

#[test]
fn two_disjoint_edges_form_two_components() {
    let g = directed(4, &[(0, 1), (2, 3)]);
    let components = connected_components(&g);
    assert_eq!(components.count(), 2);
    assert_eq!(components.groups(), vec![vec![0, 1], vec![2, 3]]);
    assert!(components.same_component(3, 2));
    assert!(!components.same_component(0, 3));
}

#[test]
fn isolated_vertices_are_singleton_components() {
    let g = directed(5, &[(4, 0)]);
    let components = connected_components(&g);
    assert_eq!(components.count(), 4);
    assert_eq!(components.labels(), &[0, 1, 2, 3, 0]);
    assert_eq!(components.members(0), vec![0, 4]);
}

// ---------------------------------------------------------------------------
// Walks
// ---------------------------------------------------------------------------

#[test]
fn square_walk_orders() {
    let g = square();
    assert_eq!(dfs_order(&g, 0), Ok(vec![0, 1, 2, 3]));
    assert_eq!(bfs_order(&g, 0), Ok(vec![0, 1, 3, 2]));
    assert_eq!(bfs_order(&g, 2), Ok(vec![2, 1, 3, 0]));
}

#[test]
fn dfs_tree_of_binary_tree() {
    let g = directed(7, &[(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)]);
    let tree = dfs_tree(&g, 0).expect("tree");
    assert_eq!(tree.order, vec![0, 1, 3, 4, 2, 5, 6]);
    assert_eq!(tree.children(2), vec![5, 6]);
    assert_eq!(tree.depth(6), Some(2));
    assert_eq!(bfs_order(&g, 0), Ok(vec![0, 1, 2, 3, 4, 5, 6]));
}

// ---------------------------------------------------------------------------
// Hamiltonian search
// ---------------------------------------------------------------------------

#[test]
fn square_hamiltonian_path_and_circuits() {
    let g = square();
    assert_eq!(hamiltonian_path(&g, 0, 3), Ok(Some(vec![0, 1, 2, 3])));
    assert_eq!(hamiltonian_path(&g, 0, 2), Ok(None));

    let circuits = hamiltonian_circuits(&g);
    assert_eq!(circuits.len(), 8);
    for circuit in &circuits {
        assert_eq!(circuit.len(), 5);
        assert_eq!(circuit.first(), circuit.last());
        let mut inner = circuit[..4].to_vec();
        inner.sort_unstable();
        assert_eq!(inner, vec![0, 1, 2, 3]);
    }
}

#[test]
fn petersen_graph_has_hamiltonian_path_but_no_circuit() {
    let outer = [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)];
    let spokes = [(0, 5), (1, 6), (2, 7), (3, 8), (4, 9)];
    let inner = [(5, 7), (7, 9), (9, 6), (6, 8), (8, 5)];
    let edges: Vec<_> = outer.into_iter().chain(spokes).chain(inner).collect();
    let g = undirected(10, &edges);

    assert!(hamiltonian_circuits(&g).is_empty());
    // A path between adjacent vertices would close into a circuit.
    assert_eq!(hamiltonian_path(&g, 0, 1), Ok(None));

    let path = hamiltonian_path(&g, 0, 2).expect("valid").expect("path exists");
    assert_eq!(path, vec![0, 1, 6, 8, 5, 7, 9, 4, 3, 2]);
    for pair in path.windows(2) {
        assert_eq!(g.adjacent(pair[0], pair[1]), Ok(true));
    }
}

// ---------------------------------------------------------------------------
// Eulerian search
// ---------------------------------------------------------------------------

#[test]
fn square_euler_circuit_consumes_eight_edges_and_restores() {
    let mut g = square();
    let before = g.clone();

    let outcome = eulerian_circuits(&mut g).expect("search");
    assert_eq!(g, before);
    assert_eq!(g.edge_count(), 8);

    let circuits = outcome.found().expect("circuit exists");
    assert!(!circuits.is_empty());
    for circuit in circuits {
        assert_eq!(circuit.len(), 9);
        assert_eq!(circuit.first(), circuit.last());
    }
}

#[test]
fn directed_trail_between_odd_endpoints() {
    // Out-degrees 1, 1, 2, 2, 2 with 0 as the only source of surplus.
    let mut g = directed(
        5,
        &[(0, 1), (1, 2), (2, 3), (2, 4), (3, 1), (3, 4), (4, 2), (4, 3)],
    );
    let before = g.clone();
    assert_eq!(
        eulerian_path(&mut g, 0, 1),
        Ok(EulerOutcome::Found(vec![0, 1, 2, 3, 4, 2, 4, 3, 1]))
    );
    assert_eq!(g, before);
}

#[test]
fn undirected_path_passes_parity_but_exhausts() {
    // Both directions of every edge are present, so in/out degrees are
    // balanced everywhere and no directed trail can end away from its start.
    let mut g = undirected(4, &[(0, 1), (1, 2), (2, 3)]);
    let before = g.clone();
    assert_eq!(eulerian_path(&mut g, 0, 3), Ok(EulerOutcome::Exhausted));
    assert_eq!(g, before);

    assert_eq!(
        eulerian_path(&mut g, 0, 2),
        Ok(EulerOutcome::Violation(ParityViolation::EvenEndpoint {
            vertex: 2,
            degree: 2
        }))
    );
}

#[test]
fn dense_euler_circuit_runs_without_deep_recursion() {
    // Complete digraph on 301 vertices: every out-degree is 300, and the
    // closed walk has 90,300 steps.
    let n = 301;
    let edges: Vec<(Vertex, Vertex)> = (0..n)
        .flat_map(|v| (0..n).filter(move |&w| w != v).map(move |w| (v, w)))
        .collect();
    let mut g = directed(n, &edges);
    let before = g.clone();

    let walk = eulerian_path(&mut g, 0, 0)
        .expect("search")
        .found()
        .expect("complete digraph has an euler circuit");
    assert_eq!(g, before);
    assert_eq!(walk.len(), n * (n - 1) + 1);
    assert_eq!(walk.first(), Some(&0));
    assert_eq!(walk.last(), Some(&0));

    let used: std::collections::HashSet<(Vertex, Vertex)> =
        walk.windows(2).map(|pair| (pair[0], pair[1])).collect();
    assert_eq!(used.len(), n * (n - 1));
    assert!(used.iter().all(|&(v, w)| g.adjacent(v, w) == Ok(true)));
}

#[test]
fn invalid_vertices_surface_as_errors() {
    let mut g = square();
    let err = GraphError::InvalidVertex {
        vertex: 4,
        vertex_count: 4,
    };
    assert_eq!(dfs_order(&g, 4), Err(err.clone()));
    assert_eq!(hamiltonian_path(&g, 4, 0), Err(err.clone()));
    assert_eq!(eulerian_path(&mut g, 0, 4), Err(err));
    assert!(matches!(
        eulerian_circuits(&mut directed(2, &[(0, 1)])),
        Ok(EulerOutcome::Violation(ParityViolation::OddVertex { vertex: 0, .. }))
    ));
}
