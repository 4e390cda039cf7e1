//! In-memory directed weighted multigraph.
//!
//! Layers, bottom-up: the node store (one canonical value per node, addressed
//! by handle), per-node edge lists ordered by (destination, weight), and the
//! [`Graph`] container that keeps both consistent under mutation. Traversal is
//! exposed twice over the same state machine: as plain [`EdgeCursor`] values
//! for positional operations, and as the borrowing [`Edges`] iterator.
//!
//! # Example
//!
//! ```rust
//! use multigraph_core::Graph;
//!
//! let mut g: Graph<&str, i32> = Graph::from(["A", "B", "C", "D"]);
//! g.insert_edge("A", "B", 1).unwrap();
//! g.insert_edge("A", "C", 2).unwrap();
//! g.insert_edge("A", "D", 3).unwrap();
//! g.insert_edge("B", "B", 1).unwrap();
//!
//! g.merge_replace_node("A", "B").unwrap();
//!
//! let edges: Vec<_> = g.iter().map(|e| (*e.from, *e.to, *e.weight)).collect();
//! assert_eq!(edges, vec![("B", "B", 1), ("B", "C", 2), ("B", "D", 3)]);
//! ```

mod container;
mod cursor;
mod display;
mod edge_list;
mod iter;
mod node_store;
mod serde_impl;
mod types;

#[cfg(test)]
mod edge_list_tests;

pub use container::Graph;
pub use cursor::EdgeCursor;
pub use display::GraphDisplay;
pub use iter::Edges;
pub use types::{EdgeRef, EdgeValue};
