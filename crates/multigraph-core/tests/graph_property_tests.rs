//! Property-based tests comparing `Graph` against a set-of-triples model.
//!
//! Every random operation sequence is applied both to the graph and to a pair
//! of `BTreeSet`s; after each step the traversal order, node list and query
//! results must agree with the model.

use std::collections::BTreeSet;

use multigraph_core::Graph;
use proptest::{
    collection::vec,
    prelude::{any, prop_assert, prop_assert_eq, prop_oneof, Strategy},
    proptest,
    test_runner::{Config as ProptestConfig, FileFailurePersistence},
};

const GRAPH_PROP_CASES: u32 = 256;
const GRAPH_PROP_MAX_SHRINK_ITERS: u32 = 2048;
const NODE_DOMAIN: u8 = 8;
const WEIGHT_DOMAIN: u8 = 4;

#[derive(Debug, Clone)]
enum Op {
    InsertNode(u8),
    InsertEdge(u8, u8, u8),
    EraseNode(u8),
    EraseEdge(u8, u8, u8),
    Replace(u8, u8),
    Merge(u8, u8),
}

#[derive(Default)]
struct Model {
    nodes: BTreeSet<u8>,
    edges: BTreeSet<(u8, u8, u8)>,
}

impl Model {
    fn apply(&mut self, op: &Op) {
        match *op {
            Op::InsertNode(n) => {
                self.nodes.insert(n);
            }
            Op::InsertEdge(a, b, w) => {
                if self.nodes.contains(&a) && self.nodes.contains(&b) {
                    self.edges.insert((a, b, w));
                }
            }
            Op::EraseNode(n) => {
                if self.nodes.remove(&n) {
                    self.edges.retain(|&(a, b, _)| a != n && b != n);
                }
            }
            Op::EraseEdge(a, b, w) => {
                self.edges.remove(&(a, b, w));
            }
            Op::Replace(old, new) => {
                if self.nodes.contains(&old) && !self.nodes.contains(&new) {
                    self.rewrite(old, new);
                }
            }
            Op::Merge(old, new) => {
                if old != new && self.nodes.contains(&old) && self.nodes.contains(&new) {
                    self.rewrite(old, new);
                }
            }
        }
    }

    fn rewrite(&mut self, old: u8, new: u8) {
        let map = |n: u8| if n == old { new } else { n };
        self.nodes.remove(&old);
        self.nodes.insert(new);
        self.edges = self
            .edges
            .iter()
            .map(|&(a, b, w)| (map(a), map(b), w))
            .collect();
    }
}

fn apply(graph: &mut Graph<u8, u8>, op: &Op) {
    // Missing-node errors are expected outcomes for random sequences.
    match *op {
        Op::InsertNode(n) => {
            graph.insert_node(n);
        }
        Op::InsertEdge(a, b, w) => {
            let _ = graph.insert_edge(&a, &b, w);
        }
        Op::EraseNode(n) => {
            graph.erase_node(&n);
        }
        Op::EraseEdge(a, b, w) => {
            let _ = graph.erase_edge(&a, &b, &w);
        }
        Op::Replace(old, new) => {
            let _ = graph.replace_node(&old, new);
        }
        Op::Merge(old, new) => {
            let _ = graph.merge_replace_node(&old, &new);
        }
    }
}

fn graph_proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: GRAPH_PROP_CASES,
        max_shrink_iters: GRAPH_PROP_MAX_SHRINK_ITERS,
        // Integration tests do not have a nearby lib.rs/main.rs, so set an
        // explicit persistence root for reproducible counterexamples.
        failure_persistence: Some(Box::new(FileFailurePersistence::WithSource(
            "graph-property-regressions",
        ))),
        ..ProptestConfig::default()
    }
}

fn node() -> impl Strategy<Value = u8> {
    0..NODE_DOMAIN
}

fn weight() -> impl Strategy<Value = u8> {
    0..WEIGHT_DOMAIN
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => node().prop_map(Op::InsertNode),
        5 => (node(), node(), weight()).prop_map(|(a, b, w)| Op::InsertEdge(a, b, w)),
        1 => node().prop_map(Op::EraseNode),
        2 => (node(), node(), weight()).prop_map(|(a, b, w)| Op::EraseEdge(a, b, w)),
        1 => (node(), node()).prop_map(|(a, b)| Op::Replace(a, b)),
        1 => (node(), node()).prop_map(|(a, b)| Op::Merge(a, b)),
    ]
}

fn triples(graph: &Graph<u8, u8>) -> Vec<(u8, u8, u8)> {
    graph.iter().map(|e| (*e.from, *e.to, *e.weight)).collect()
}

fn build(ops: &[Op]) -> Graph<u8, u8> {
    let mut graph = Graph::new();
    for op in ops {
        apply(&mut graph, op);
    }
    graph
}

proptest! {
    #![proptest_config(graph_proptest_config())]

    #[test]
    fn test_graph_matches_model(ops in vec(op_strategy(), 0..64)) {
        let mut graph = Graph::new();
        let mut model = Model::default();

        for op in &ops {
            apply(&mut graph, op);
            model.apply(op);

            prop_assert_eq!(graph.nodes(), model.nodes.iter().copied().collect::<Vec<_>>());
            prop_assert_eq!(triples(&graph), model.edges.iter().copied().collect::<Vec<_>>());
            prop_assert_eq!(graph.edge_count(), model.edges.len());
        }
    }

    #[test]
    fn test_nodes_are_sorted_and_unique(values in vec(any::<u8>(), 0..64)) {
        let graph: Graph<u8, u8> = values.iter().copied().collect();
        let expected: Vec<u8> = values.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        prop_assert_eq!(graph.nodes(), expected);
    }

    #[test]
    fn test_backward_traversal_mirrors_forward(ops in vec(op_strategy(), 0..64)) {
        let graph = build(&ops);

        let forward = triples(&graph);
        let mut backward: Vec<_> = graph.iter().rev().map(|e| (*e.from, *e.to, *e.weight)).collect();
        backward.reverse();
        prop_assert_eq!(&forward, &backward);

        let last = graph.get(graph.prev_cursor(graph.end())).map(|e| (*e.from, *e.to, *e.weight));
        prop_assert_eq!(last, forward.iter().copied().max());
    }

    #[test]
    fn test_erase_cascade_removes_incoming(ops in vec(op_strategy(), 0..64), victim in node()) {
        let mut graph = build(&ops);
        graph.erase_node(&victim);

        for y in graph.nodes() {
            prop_assert!(!graph.is_connected(&y, &victim).unwrap_or(false));
            prop_assert!(!graph.connections(&y).unwrap_or_default().contains(&victim));
        }
    }

    #[test]
    fn test_erase_at_returns_next(ops in vec(op_strategy(), 0..64), pick in any::<usize>()) {
        let mut graph = build(&ops);
        let before = triples(&graph);
        if before.is_empty() {
            return Ok(());
        }
        let (a, b, w) = before[pick % before.len()];

        let next = graph.erase_edge_at(graph.find(&a, &b, &w));

        let expected_next = before.iter().copied().find(|t| *t > (a, b, w));
        let actual_next = graph.get(next).map(|e| (*e.from, *e.to, *e.weight));
        prop_assert_eq!(actual_next, expected_next);
        prop_assert_eq!(graph.edge_count(), before.len() - 1);
    }

    #[test]
    fn test_equality_ignores_operation_order(ops in vec(op_strategy(), 0..64)) {
        let graph = build(&ops);

        let mut rebuilt: Graph<u8, u8> = graph.nodes().into_iter().rev().collect();
        for (a, b, w) in triples(&graph).into_iter().rev() {
            prop_assert!(rebuilt.insert_edge(&a, &b, w).unwrap_or(false));
        }
        prop_assert_eq!(&rebuilt, &graph);

        let copy = graph.clone();
        rebuilt.insert_node(u8::MAX);
        prop_assert_eq!(&copy, &graph);
        prop_assert!(rebuilt != graph);
    }
}
