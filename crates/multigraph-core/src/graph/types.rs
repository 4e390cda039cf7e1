//! Edge projections handed out by the graph.

use serde::{Deserialize, Serialize};

/// Borrowed `(from, to, weight)` view of one stored edge.
///
/// Field order gives the derived ordering the lexicographic traversal order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct EdgeRef<'a, N, E> {
    /// Source node.
    pub from: &'a N,
    /// Destination node.
    pub to: &'a N,
    /// Edge weight.
    pub weight: &'a E,
}

// Manual impls: derive would require `N: Clone` / `E: Clone`.
impl<N, E> Clone for EdgeRef<'_, N, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N, E> Copy for EdgeRef<'_, N, E> {}

impl<N: Clone, E: Clone> EdgeRef<'_, N, E> {
    /// Copies the viewed values into an owned [`EdgeValue`].
    #[must_use]
    pub fn to_value(&self) -> EdgeValue<N, E> {
        EdgeValue {
            from: self.from.clone(),
            to: self.to.clone(),
            weight: self.weight.clone(),
        }
    }
}

/// Owned `(from, to, weight)` triple.
///
/// # Example
///
/// ```rust
/// use multigraph_core::{EdgeValue, Graph};
///
/// let mut g: Graph<String, i32> = ["A", "B"].into_iter().map(String::from).collect();
/// g.insert_edge("A", "B", 3).unwrap();
///
/// let first = g.get(g.begin()).unwrap().to_value();
/// assert_eq!(first, EdgeValue::new("A".to_string(), "B".to_string(), 3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeValue<N, E> {
    /// Source node.
    pub from: N,
    /// Destination node.
    pub to: N,
    /// Edge weight.
    pub weight: E,
}

impl<N, E> EdgeValue<N, E> {
    /// Creates a new triple.
    #[must_use]
    pub fn new(from: N, to: N, weight: E) -> Self {
        Self { from, to, weight }
    }
}

impl<N: Clone, E: Clone> From<EdgeRef<'_, N, E>> for EdgeValue<N, E> {
    fn from(edge: EdgeRef<'_, N, E>) -> Self {
        edge.to_value()
    }
}
