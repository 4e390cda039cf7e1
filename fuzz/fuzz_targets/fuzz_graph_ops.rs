//! Fuzz target for graph mutation sequences.
//!
//! Replays arbitrary operation sequences to find:
//! - Panics in cursor stepping or handle remapping after erase/merge
//! - Traversal order violations
//! - Node/edge count drift
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_graph_ops
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use multigraph_core::Graph;

/// One graph operation over a small node and weight domain.
#[derive(Arbitrary, Debug)]
enum Op {
    InsertNode(u8),
    InsertEdge(u8, u8, u8),
    EraseNode(u8),
    EraseEdge(u8, u8, u8),
    EraseAt(u16),
    EraseRange(u16, u16),
    Replace(u8, u8),
    Merge(u8, u8),
    Clear,
}

/// Returns the cursor `steps` positions after `begin()`.
fn cursor_at(graph: &Graph<u8, u8>, steps: u16) -> multigraph_core::EdgeCursor {
    let mut cursor = graph.begin();
    for _ in 0..steps {
        cursor = graph.next_cursor(cursor);
    }
    cursor
}

fuzz_target!(|ops: Vec<Op>| {
    let mut graph: Graph<u8, u8> = Graph::new();

    // Limit sequence length to keep runs fast
    for op in ops.iter().take(256) {
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
            Op::EraseAt(steps) => {
                let cursor = cursor_at(&graph, steps);
                graph.erase_edge_at(cursor);
            }
            Op::EraseRange(from, len) => {
                let first = cursor_at(&graph, from);
                let last = cursor_at(&graph, from.saturating_add(len));
                graph.erase_edge_range(first, last);
            }
            Op::Replace(old, new) => {
                let _ = graph.replace_node(&old, new);
            }
            Op::Merge(old, new) => {
                let _ = graph.merge_replace_node(&old, &new);
            }
            Op::Clear => graph.clear(),
        }

        let edges: Vec<_> = graph.iter().collect();
        assert_eq!(edges.len(), graph.edge_count());
        assert!(edges.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(edges.iter().all(|e| graph.is_node(e.from) && graph.is_node(e.to)));
        assert_eq!(graph.iter().rev().count(), edges.len());
    }
});
