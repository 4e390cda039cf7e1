//! The graph container: node store + per-node adjacency.

use std::borrow::Borrow;
use std::fmt;

use tracing::{debug, trace};

use crate::config::GraphConfig;
use crate::error::{Error, Result};

use super::cursor::{EdgeCursor, NestedLayout};
use super::edge_list::EdgeList;
use super::iter::Edges;
use super::node_store::{NodeId, NodeStore};
use super::types::EdgeRef;

/// Directed, weighted multigraph with value-ordered nodes and edges.
///
/// Nodes are unique values of `N`. Edges are unique `(from, to, weight)`
/// triples; several weights may connect the same ordered node pair, and
/// self-loops are allowed. Traversal visits edges ascending by source, then
/// destination, then weight.
///
/// `Clone` produces an independent deep copy. Moving out with
/// [`std::mem::take`] leaves an empty graph behind.
///
/// # Example
///
/// ```rust
/// use multigraph_core::Graph;
///
/// let mut g: Graph<String, i32> = ["A", "B"].into_iter().map(String::from).collect();
/// assert!(g.insert_edge("A", "B", 14).unwrap());
/// assert!(g.insert_edge("A", "B", 3).unwrap());
/// assert!(!g.insert_edge("A", "B", 3).unwrap());
///
/// assert_eq!(g.weights("A", "B").unwrap(), vec![3, 14]);
/// let first = g.get(g.begin()).unwrap();
/// assert_eq!((first.from.as_str(), first.to.as_str(), *first.weight), ("A", "B", 3));
/// ```
#[derive(Clone)]
pub struct Graph<N, E> {
    /// Canonical node values and their ascending index.
    pub(super) nodes: NodeStore<N>,
    /// Outgoing edges, indexed by `NodeId::index()` of the source.
    pub(super) adjacency: Vec<EdgeList<E>>,
    /// Capacity reserved for a node's edge list when it is created.
    edge_capacity: usize,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> Graph<N, E> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: NodeStore::default(),
            adjacency: Vec::new(),
            edge_capacity: 0,
        }
    }

    /// Creates an empty graph with room for `expected_nodes` nodes.
    #[must_use]
    pub fn with_capacity(expected_nodes: usize) -> Self {
        Self {
            nodes: NodeStore::with_capacity(expected_nodes),
            adjacency: Vec::with_capacity(expected_nodes),
            edge_capacity: 0,
        }
    }

    /// Creates an empty graph using the storage hints of `config`.
    #[must_use]
    pub fn with_config(config: &GraphConfig) -> Self {
        let mut graph = Self::with_capacity(config.storage.node_capacity);
        graph.edge_capacity = config.storage.edge_capacity;
        graph
    }

    /// Validates `config`, then creates an empty graph from its storage hints.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if `config` fails [`GraphConfig::validate`].
    pub fn try_with_config(config: &GraphConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Returns true if the graph stores no node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(EdgeList::len).sum()
    }

    /// Erases every node and edge.
    ///
    /// All cursors are invalidated.
    pub fn clear(&mut self) {
        debug!(
            nodes = self.nodes.len(),
            edges = self.edge_count(),
            "Clearing graph"
        );
        self.nodes.clear();
        self.adjacency.clear();
    }

    /// Returns the past-the-end cursor.
    #[must_use]
    pub fn end(&self) -> EdgeCursor {
        EdgeCursor::end()
    }

    /// Returns the cursor to the first edge, or `end()` if there is none.
    #[must_use]
    pub fn begin(&self) -> EdgeCursor {
        EdgeCursor::first_from(self, 0)
    }

    /// Returns the cursor following `cursor` in traversal order.
    ///
    /// Advancing `end()` returns `end()`.
    #[must_use]
    pub fn next_cursor(&self, cursor: EdgeCursor) -> EdgeCursor {
        cursor.advance(self)
    }

    /// Returns the cursor preceding `cursor` in traversal order.
    ///
    /// `prev_cursor(end())` denotes the last edge. Stepping back from
    /// `begin()` is a caller error and yields a singular cursor.
    #[must_use]
    pub fn prev_cursor(&self, cursor: EdgeCursor) -> EdgeCursor {
        cursor.retreat(self)
    }

    /// Returns the edge denoted by `cursor`.
    ///
    /// `None` for `end()`, a singular cursor, or a cursor invalidated by a
    /// mutation that no longer lands on an edge.
    #[must_use]
    pub fn get(&self, cursor: EdgeCursor) -> Option<EdgeRef<'_, N, E>> {
        let (rank, index) = cursor.locate(self)?;
        let from = self.nodes.id_at(rank)?;
        let edge = self.adjacency[from.index()].get(index)?;
        Some(EdgeRef {
            from: self.nodes.value(from),
            to: self.nodes.value(edge.to),
            weight: &edge.weight,
        })
    }

    /// Iterates over all edges in traversal order.
    #[must_use]
    pub fn iter(&self) -> Edges<'_, N, E> {
        Edges::new(self)
    }
}

impl<N, E> NestedLayout for Graph<N, E> {
    fn outer_len(&self) -> usize {
        self.nodes.len()
    }

    fn inner_len(&self, outer: usize) -> usize {
        self.nodes
            .id_at(outer)
            .map_or(0, |id| self.adjacency[id.index()].len())
    }
}

impl<N: Ord, E: Ord> Graph<N, E> {
    fn require<Q>(&self, operation: &'static str, value: &Q) -> Result<NodeId>
    where
        N: Borrow<Q>,
        Q: Ord + fmt::Debug + ?Sized,
    {
        self.nodes
            .get(value)
            .map(|(_, id)| id)
            .ok_or_else(|| Error::missing_node(operation, value))
    }

    /// Removes the node slot `id` and repairs every handle.
    ///
    /// The caller has already dropped all edges pointing at `id`.
    fn remove_slot(&mut self, id: NodeId) {
        let (_, moved) = self.nodes.swap_remove(id);
        self.adjacency.swap_remove(id.index());
        if let Some(from) = moved {
            for list in &mut self.adjacency {
                list.remap(from, id);
            }
        }
    }

    /// Adds `value` as a node unless an equal node is already stored.
    ///
    /// Returns true if the node was added. All cursors are invalidated.
    pub fn insert_node(&mut self, value: N) -> bool {
        match self.nodes.insert(value) {
            Some(id) => {
                debug_assert_eq!(id.index(), self.adjacency.len());
                self.adjacency
                    .push(EdgeList::with_capacity(self.edge_capacity));
                trace!(nodes = self.nodes.len(), "Inserted node");
                true
            }
            None => false,
        }
    }

    /// Adds the edge `src → dst` with `weight` unless that triple is stored.
    ///
    /// Returns true if the edge was added. Self-loops are allowed.
    /// All cursors are invalidated.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingNode` if `src` or `dst` is not a node.
    pub fn insert_edge<Q>(&mut self, src: &Q, dst: &Q, weight: E) -> Result<bool>
    where
        N: Borrow<Q>,
        Q: Ord + fmt::Debug + ?Sized,
    {
        let from = self.require("insert_edge", src)?;
        let to = self.require("insert_edge", dst)?;

        let inserted = self.adjacency[from.index()].insert(&self.nodes, to, weight);
        if !inserted {
            trace!(src = ?src, dst = ?dst, "Edge already stored");
        }
        Ok(inserted)
    }

    /// Renames node `old` to `new` in place.
    ///
    /// Every edge into or out of `old` now belongs to `new`. Returns false and
    /// changes nothing if a node equal to `new` already exists (including
    /// `old == new`). All cursors are invalidated.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingNode` if `old` is not a node.
    pub fn replace_node<Q>(&mut self, old: &Q, new: N) -> Result<bool>
    where
        N: Borrow<Q>,
        Q: Ord + fmt::Debug + ?Sized,
    {
        let id = self.require("replace_node", old)?;
        if self.nodes.contains::<N>(&new) {
            return Ok(false);
        }

        self.nodes.rename(id, new);
        let mut resorted = 0usize;
        for list in &mut self.adjacency {
            if list.resort(&self.nodes, id) {
                resorted += 1;
            }
        }
        debug!(old = ?old, resorted, "Replaced node");
        Ok(true)
    }

    /// Merges node `old` into the existing node `new`, then erases `old`.
    ///
    /// Every edge into or out of `old` is re-pointed at `new`. Edges that
    /// become identical to an edge already stored are dropped. Merging a node
    /// into itself does nothing. All cursors are invalidated.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingNode` if `old` or `new` is not a node.
    pub fn merge_replace_node<Q>(&mut self, old: &Q, new: &Q) -> Result<()>
    where
        N: Borrow<Q>,
        Q: Ord + fmt::Debug + ?Sized,
    {
        let old_id = self.require("merge_replace_node", old)?;
        let new_id = self.require("merge_replace_node", new)?;
        if old_id == new_id {
            return Ok(());
        }

        let mut dropped = 0usize;
        for (index, list) in self.adjacency.iter_mut().enumerate() {
            if index != old_id.index() {
                dropped += list.retarget(&self.nodes, old_id, new_id);
            }
        }

        let outgoing = std::mem::take(&mut self.adjacency[old_id.index()]);
        let mut moved = 0usize;
        for edge in outgoing.into_edges() {
            let to = if edge.to == old_id { new_id } else { edge.to };
            if self.adjacency[new_id.index()].insert(&self.nodes, to, edge.weight) {
                moved += 1;
            } else {
                dropped += 1;
            }
        }

        self.remove_slot(old_id);
        debug!(old = ?old, new = ?new, moved, dropped, "Merged node");
        Ok(())
    }

    /// Erases the node equal to `value` with all its incoming and outgoing edges.
    ///
    /// Returns true if a node was erased. All cursors are invalidated.
    pub fn erase_node<Q>(&mut self, value: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some((_, id)) = self.nodes.get(value) else {
            return false;
        };

        let removed_outgoing = self.adjacency[id.index()].len();
        let mut removed_incoming = 0usize;
        for (index, list) in self.adjacency.iter_mut().enumerate() {
            if index != id.index() {
                removed_incoming += list.remove_to(id);
            }
        }

        self.remove_slot(id);
        debug!(removed_outgoing, removed_incoming, "Erased node");
        true
    }

    /// Erases the edge `src → dst` with `weight`.
    ///
    /// Returns true if the edge existed. All cursors are invalidated.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingNode` if `src` or `dst` is not a node.
    pub fn erase_edge<Q>(&mut self, src: &Q, dst: &Q, weight: &E) -> Result<bool>
    where
        N: Borrow<Q>,
        Q: Ord + fmt::Debug + ?Sized,
    {
        let from = self.require("erase_edge", src)?;
        let to = self.require("erase_edge", dst)?;

        Ok(self.adjacency[from.index()]
            .remove(&self.nodes, to, weight)
            .is_some())
    }

    /// Erases the edge denoted by `cursor`.
    ///
    /// Returns the cursor to the edge that followed it, or `end()`. Passing
    /// `end()` (or any cursor that denotes no edge) erases nothing and returns
    /// `end()`. All other cursors are invalidated.
    pub fn erase_edge_at(&mut self, cursor: EdgeCursor) -> EdgeCursor {
        let Some((rank, index)) = cursor.locate(self) else {
            return EdgeCursor::end();
        };
        let Some(from) = self.nodes.id_at(rank) else {
            return EdgeCursor::end();
        };

        let list = &mut self.adjacency[from.index()];
        list.remove_at(index);
        if index < list.len() {
            EdgeCursor::at(rank, index)
        } else {
            EdgeCursor::first_from(self, rank + 1)
        }
    }

    /// Erases every edge in `[first, last)` of the traversal order.
    ///
    /// Returns the cursor denoting the position `last` denoted, after the
    /// removal. `last` must be reachable from `first`; otherwise every edge
    /// from `first` onward is erased. All other cursors are invalidated.
    pub fn erase_edge_range(&mut self, first: EdgeCursor, last: EdgeCursor) -> EdgeCursor {
        let mut span = 0usize;
        let mut cursor = first;
        while cursor != last && cursor.locate(self).is_some() {
            cursor = cursor.advance(self);
            span += 1;
        }
        if span == 0 {
            return last;
        }

        let mut cursor = first;
        for _ in 0..span {
            cursor = self.erase_edge_at(cursor);
        }
        debug!(removed = span, "Erased edge range");
        cursor
    }

    /// Returns true if a node equal to `value` is stored.
    #[must_use]
    pub fn is_node<Q>(&self, value: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.nodes.contains(value)
    }

    /// Returns true if at least one edge `src → dst` exists, whatever its weight.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingNode` if `src` or `dst` is not a node.
    pub fn is_connected<Q>(&self, src: &Q, dst: &Q) -> Result<bool>
    where
        N: Borrow<Q>,
        Q: Ord + fmt::Debug + ?Sized,
    {
        let from = self.require("is_connected", src)?;
        let to = self.require("is_connected", dst)?;

        Ok(!self.adjacency[from.index()]
            .to_range(&self.nodes, to)
            .is_empty())
    }

    /// Returns every stored node, ascending.
    #[must_use]
    pub fn nodes(&self) -> Vec<N>
    where
        N: Clone,
    {
        self.nodes.iter().cloned().collect()
    }

    /// Returns the weights of all edges `src → dst`, ascending.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingNode` if `src` or `dst` is not a node.
    pub fn weights<Q>(&self, src: &Q, dst: &Q) -> Result<Vec<E>>
    where
        N: Borrow<Q>,
        Q: Ord + fmt::Debug + ?Sized,
        E: Clone,
    {
        let from = self.require("weights", src)?;
        let to = self.require("weights", dst)?;

        Ok(self.adjacency[from.index()]
            .to_range(&self.nodes, to)
            .iter()
            .map(|edge| edge.weight.clone())
            .collect())
    }

    /// Returns the cursor to the edge `src → dst` with `weight`, or `end()`.
    ///
    /// Absent nodes are not an error here; they yield `end()`.
    #[must_use]
    pub fn find<Q>(&self, src: &Q, dst: &Q, weight: &E) -> EdgeCursor
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (Some((rank, from)), Some((_, to))) = (self.nodes.get(src), self.nodes.get(dst)) else {
            return EdgeCursor::end();
        };

        self.adjacency[from.index()]
            .search(&self.nodes, to, weight)
            .map_or(EdgeCursor::end(), |index| EdgeCursor::at(rank, index))
    }

    /// Returns the distinct destinations of the outgoing edges of `src`, ascending.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingNode` if `src` is not a node.
    pub fn connections<Q>(&self, src: &Q) -> Result<Vec<N>>
    where
        N: Borrow<Q> + Clone,
        Q: Ord + fmt::Debug + ?Sized,
    {
        let from = self.require("connections", src)?;

        let mut destinations: Vec<N> = Vec::new();
        let mut previous: Option<NodeId> = None;
        for edge in self.adjacency[from.index()].iter() {
            if previous != Some(edge.to) {
                destinations.push(self.nodes.value(edge.to).clone());
                previous = Some(edge.to);
            }
        }
        Ok(destinations)
    }
}

impl<N: Ord, E: Ord> PartialEq for Graph<N, E> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes.len() == other.nodes.len()
            && self.nodes.iter().eq(other.nodes.iter())
            && self.iter().eq(other.iter())
    }
}

impl<N: Ord, E: Ord> Eq for Graph<N, E> {}

impl<N: fmt::Debug, E: fmt::Debug> fmt::Debug for Graph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.nodes.iter().collect::<Vec<_>>())
            .field("edges", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<N: Ord, E: Ord> FromIterator<N> for Graph<N, E> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<N: Ord, E: Ord> Extend<N> for Graph<N, E> {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        for value in iter {
            self.insert_node(value);
        }
    }
}

impl<N: Ord, E: Ord, const K: usize> From<[N; K]> for Graph<N, E> {
    fn from(values: [N; K]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, N, E> IntoIterator for &'a Graph<N, E> {
    type Item = EdgeRef<'a, N, E>;
    type IntoIter = Edges<'a, N, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
