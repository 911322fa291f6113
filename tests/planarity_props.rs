//! Property-based tests for the planarity test.
//!
//! These tests verify invariants that should hold for any undirected graph:
//! - Repeated runs are deterministic and independent of each other
//! - The edge-count shortcut never changes a verdict on simple graphs
//! - The palm tree satisfies the structural invariants of a DFS forest
//! - Planarity is preserved under relabelling and taking subgraphs

use itertools::Itertools;
use lrplanar::{algo::*, gens::*, prelude::*};
use proptest::prelude::*;

/// Generate an arbitrary simple graph as node count and list of edges (duplicates and self-loops
/// are dropped when building the graph)
fn arb_graph(max_n: NumNodes) -> impl Strategy<Value = (NumNodes, Vec<(Node, Node)>)> {
    (1..=max_n).prop_flat_map(|n| {
        let max_m = (3 * n as usize).max(1);
        (Just(n), prop::collection::vec((0..n, 0..n), 0..=max_m))
    })
}

fn build_graph(n: NumNodes, edges: &[(Node, Node)]) -> AdjArrayUndir {
    let mut graph = AdjArrayUndir::new(n);
    for &(u, v) in edges {
        if u != v {
            graph.try_add_edge(u, v);
        }
    }
    graph
}

/// Builds a maximal planar graph from a list of face choices: node `3 + i` is inserted into the
/// face with index `choices[i] % #faces`
fn maximal_planar(choices: &[usize]) -> AdjArrayUndir {
    let n = 3 + choices.len() as NumNodes;
    let mut graph = AdjArrayUndir::new(n);
    graph.connect_cycle([0, 1, 2]);

    let mut faces = vec![[0, 1, 2]];
    for (x, &choice) in (3..n).zip(choices) {
        let [a, b, c] = faces.swap_remove(choice % faces.len());
        graph.connect_biclique([x], [a, b, c]);
        faces.extend([[a, b, x], [b, c, x], [a, c, x]]);
    }

    graph
}

fn run_test(graph: &AdjArrayUndir, euler_bound: bool) -> bool {
    let mut test = LeftRightPlanarity::new(graph).with_euler_bound(euler_bound);
    test.run();
    test.is_planar().unwrap()
}

mod verdict_props {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn runs_are_deterministic((n, edges) in arb_graph(30)) {
            let graph = build_graph(n, &edges);

            let mut test = LeftRightPlanarity::new(&graph).with_euler_bound(false);
            test.run();
            let first_verdict = test.is_planar().unwrap();
            let first_tree = test.palm_tree().cloned().unwrap();

            test.run();
            prop_assert_eq!(test.is_planar().unwrap(), first_verdict);

            let second_tree = test.palm_tree().unwrap();
            prop_assert_eq!(first_tree.roots(), second_tree.roots());
            prop_assert!(first_tree.oriented_edges().eq(second_tree.oriented_edges()));

            // a fresh instance agrees with the reused one
            prop_assert_eq!(run_test(&graph, false), first_verdict);
        }

        #[test]
        fn edge_bound_never_changes_verdict((n, edges) in arb_graph(25)) {
            let graph = build_graph(n, &edges);
            let with_bound = run_test(&graph, true);
            let without_bound = run_test(&graph, false);

            prop_assert_eq!(with_bound, without_bound);
            if exceeds_euler_bound(n, graph.number_of_edges()) {
                prop_assert!(!without_bound);
            }
        }

        #[test]
        fn verdict_is_invariant_under_relabelling(
            (n, edges, perm) in arb_graph(20).prop_flat_map(|(n, edges)| {
                let perm = Just((0..n).collect_vec()).prop_shuffle();
                (Just(n), Just(edges), perm)
            })
        ) {
            let graph = build_graph(n, &edges);
            let relabelled_edges = edges
                .iter()
                .map(|&(u, v)| (perm[u as usize], perm[v as usize]))
                .collect_vec();
            let relabelled = build_graph(n, &relabelled_edges);

            prop_assert_eq!(relabelled.number_of_edges(), graph.number_of_edges());
            prop_assert_eq!(run_test(&graph, false), run_test(&relabelled, false));
        }
    }
}

mod planar_family_props {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn maximal_planar_graphs_are_planar(choices in prop::collection::vec(any::<usize>(), 0..80)) {
            let graph = maximal_planar(&choices);
            prop_assert_eq!(graph.number_of_edges(), 3 * graph.number_of_nodes() - 6);
            prop_assert!(run_test(&graph, false));
        }

        #[test]
        fn subgraphs_of_planar_graphs_are_planar(
            choices in prop::collection::vec(any::<usize>(), 0..80),
            keep in prop::collection::vec(any::<bool>(), 240),
        ) {
            let full = maximal_planar(&choices);
            let edges = full
                .ordered_edges(true)
                .zip(keep.iter().cycle())
                .filter_map(|(e, &keep)| keep.then_some((e.0, e.1)))
                .collect_vec();

            let graph = build_graph(full.number_of_nodes(), &edges);
            prop_assert!(run_test(&graph, true));
            prop_assert!(run_test(&graph, false));
        }

        #[test]
        fn planar_graph_with_kuratowski_component_is_not_planar(
            choices in prop::collection::vec(any::<usize>(), 0..40),
            use_k5 in any::<bool>(),
        ) {
            let planar = maximal_planar(&choices);
            let offset = planar.number_of_nodes();

            let mut graph = AdjArrayUndir::new(offset + 6);
            graph.add_edges(planar.edges(true));
            if use_k5 {
                graph.connect_clique(offset..offset + 5);
            } else {
                graph.connect_biclique(offset..offset + 3, offset + 3..offset + 6);
            }

            prop_assert!(!run_test(&graph, false));
        }
    }
}

mod palm_tree_props {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn palm_tree_is_a_dfs_forest((n, edges) in arb_graph(30)) {
            let graph = build_graph(n, &edges);

            let mut test = LeftRightPlanarity::new(&graph).with_euler_bound(false);
            test.run();
            let tree = test.palm_tree().unwrap();

            prop_assert_eq!(tree.number_of_edges(), graph.number_of_edges());

            let mut tree_edges = 0;
            for oe in tree.oriented_edges() {
                let Edge(u, v) = oe.edge;
                let hu = tree.height_of(u).unwrap();
                let hv = tree.height_of(v).unwrap();

                match oe.kind {
                    EdgeKind::Tree => {
                        tree_edges += 1;
                        prop_assert_eq!(hv, hu + 1);
                        prop_assert_eq!(tree.parent_edge_of(v), Some(oe.edge));
                    }
                    EdgeKind::Back => {
                        prop_assert!(hv < hu);
                        prop_assert_eq!(oe.lowpoint, hv);
                    }
                }
                prop_assert!(oe.lowpoint <= oe.second_lowpoint);
            }

            // a spanning forest has exactly one tree edge per non-root node
            prop_assert_eq!(tree_edges + tree.roots().len(), n as usize);
            for &root in tree.roots() {
                prop_assert_eq!(tree.height_of(root), Some(0));
                prop_assert_eq!(tree.parent_edge_of(root), None);
            }

            for u in graph.vertices() {
                prop_assert!(tree
                    .out_edges_of(u)
                    .tuple_windows()
                    .all(|(a, b)| a.nesting_depth <= b.nesting_depth));
            }
        }

        #[test]
        fn lowpoints_decrease_towards_the_root((n, edges) in arb_graph(30)) {
            let graph = build_graph(n, &edges);

            let mut test = LeftRightPlanarity::new(&graph).with_euler_bound(false);
            test.run();
            let tree = test.palm_tree().unwrap();

            // the lowpoint of a tree edge is bounded by the lowpoints of all edges leaving its target
            for oe in tree.oriented_edges().filter(|oe| oe.kind == EdgeKind::Tree) {
                let v = oe.edge.target();
                for child in tree.out_edges_of(v) {
                    prop_assert!(oe.lowpoint <= child.lowpoint);
                }
            }
        }
    }
}
