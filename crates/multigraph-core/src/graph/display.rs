//! Text dump of a graph.
//!
//! ```text
//! A (
//!   B | 3
//!   B | 14
//! )
//! B (
//! )
//! ```
//!
//! Nodes ascend by value; each block lists the node's outgoing edges ascending
//! by (destination, weight). A graph without nodes renders as one empty line.

use std::fmt;

use crate::config::DisplayConfig;

use super::container::Graph;

const CANONICAL_INDENT: usize = 2;
const CANONICAL_SEPARATOR: &str = " | ";

/// Formatting adapter returned by [`Graph::display_with`].
#[derive(Debug)]
pub struct GraphDisplay<'a, N, E> {
    graph: &'a Graph<N, E>,
    indent: usize,
    separator: &'a str,
}

impl<N, E> Graph<N, E> {
    /// Renders the graph with the indentation and separator of `config`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use multigraph_core::{DisplayConfig, Graph};
    ///
    /// let mut g: Graph<i32, i32> = Graph::from([1, 2]);
    /// g.insert_edge(&1, &2, 7).unwrap();
    ///
    /// let config = DisplayConfig { indent: 4, separator: " -> ".to_string() };
    /// assert_eq!(g.display_with(&config).to_string(), "1 (\n    2 -> 7\n)\n2 (\n)\n");
    /// ```
    #[must_use]
    pub fn display_with<'a>(&'a self, config: &'a DisplayConfig) -> GraphDisplay<'a, N, E> {
        GraphDisplay {
            graph: self,
            indent: config.indent,
            separator: &config.separator,
        }
    }
}

impl<N: fmt::Display, E: fmt::Display> fmt::Display for GraphDisplay<'_, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.graph;
        if graph.nodes.is_empty() {
            return writeln!(f);
        }

        for id in graph.nodes.ids() {
            writeln!(f, "{} (", graph.nodes.value(id))?;
            for edge in graph.adjacency[id.index()].iter() {
                writeln!(
                    f,
                    "{:indent$}{}{}{}",
                    "",
                    graph.nodes.value(edge.to),
                    self.separator,
                    edge.weight,
                    indent = self.indent
                )?;
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}

impl<N: fmt::Display, E: fmt::Display> fmt::Display for Graph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        GraphDisplay {
            graph: self,
            indent: CANONICAL_INDENT,
            separator: CANONICAL_SEPARATOR,
        }
        .fmt(f)
    }
}
