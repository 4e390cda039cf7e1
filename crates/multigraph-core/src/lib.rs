//! # Multigraph Core
//!
//! A generic in-memory container for directed, weighted, possibly-cyclic
//! multigraphs.
//!
//! - **Unique nodes**: one stored value per distinct node.
//! - **Multi-edges**: any number of distinct weights between the same ordered
//!   pair of nodes, self-loops included; `(from, to, weight)` triples are unique.
//! - **Ordered traversal**: edges are visited ascending by source, destination,
//!   then weight, forwards or backwards.
//! - **Structural edits**: rename a node in place, merge one node into another
//!   with duplicate suppression, cascade erasure.
//!
//! ## Quick Start
//!
//! ```rust
//! use multigraph_core::Graph;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut g: Graph<String, i32> = ["A", "B"].into_iter().map(String::from).collect();
//!
//!     g.insert_edge("A", "B", 14)?;
//!     g.insert_edge("A", "B", 3)?;
//!     assert_eq!(g.weights("A", "B")?, vec![3, 14]);
//!
//!     // Precondition violations are errors, expected outcomes are booleans.
//!     assert!(g.insert_edge("A", "Z", 1).is_err());
//!     assert!(!g.insert_edge("A", "B", 3)?);
//!
//!     assert_eq!(g.to_string(), "A (\n  B | 3\n  B | 14\n)\nB (\n)\n");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![cfg_attr(
    test,
    allow(
        clippy::doc_markdown,
        clippy::uninlined_format_args,
        clippy::cast_lossless,
        clippy::manual_assert
    )
)]

pub mod config;
pub mod error;
pub mod graph;

pub use config::{ConfigError, DisplayConfig, GraphConfig, StorageConfig};
pub use error::{Error, Result};
pub use graph::{EdgeCursor, EdgeRef, EdgeValue, Edges, Graph, GraphDisplay};
