//! Per-node adjacency: the outgoing edges of one source node.
//!
//! Edges are kept sorted by (destination value, weight). Destinations are
//! [`NodeId`] handles, so every comparison resolves through the [`NodeStore`].
//! Any operation that changes the value behind a handle must re-sort the
//! lists that reference it.

use std::cmp::Ordering;

use super::node_store::{NodeId, NodeStore};

/// One outgoing edge: destination handle plus the owned weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Edge<E> {
    /// Destination node.
    pub(crate) to: NodeId,
    /// Edge weight, owned by this edge.
    pub(crate) weight: E,
}

/// Ordered outgoing edges of a single node.
#[derive(Debug, Clone)]
pub(crate) struct EdgeList<E> {
    edges: Vec<Edge<E>>,
}

impl<E> Default for EdgeList<E> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

impl<E> EdgeList<E> {
    /// Creates an edge list with pre-allocated capacity.
    #[must_use]
    pub(crate) fn with_capacity(expected_edges: usize) -> Self {
        Self {
            edges: Vec::with_capacity(expected_edges),
        }
    }

    /// Returns the number of outgoing edges.
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the node has no outgoing edge.
    #[must_use]
    pub(crate) fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the edge at `index`.
    #[must_use]
    pub(crate) fn get(&self, index: usize) -> Option<&Edge<E>> {
        self.edges.get(index)
    }

    /// Iterates over edges in (destination, weight) order.
    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Edge<E>> {
        self.edges.iter()
    }

    /// Consumes the list, yielding its edges in order.
    pub(crate) fn into_edges(self) -> std::vec::IntoIter<Edge<E>> {
        self.edges.into_iter()
    }

    /// Removes and returns the edge at `index`.
    pub(crate) fn remove_at(&mut self, index: usize) -> Edge<E> {
        self.edges.remove(index)
    }

    /// Returns true if any edge points at `to`.
    #[must_use]
    pub(crate) fn targets(&self, to: NodeId) -> bool {
        self.edges.iter().any(|edge| edge.to == to)
    }

    /// Removes every edge pointing at `to`, returning how many were removed.
    pub(crate) fn remove_to(&mut self, to: NodeId) -> usize {
        let before = self.edges.len();
        self.edges.retain(|edge| edge.to != to);
        before - self.edges.len()
    }

    /// Rewrites handle `from` to `to` after an arena slot move.
    ///
    /// Both handles denote the same value, so ordering is unaffected.
    pub(crate) fn remap(&mut self, from: NodeId, to: NodeId) {
        for edge in &mut self.edges {
            if edge.to == from {
                edge.to = to;
            }
        }
    }
}

impl<E: Ord> EdgeList<E> {
    fn compare<N: Ord>(
        nodes: &NodeStore<N>,
        edge: &Edge<E>,
        to: NodeId,
        weight: &E,
    ) -> Ordering {
        nodes
            .value(edge.to)
            .cmp(nodes.value(to))
            .then_with(|| edge.weight.cmp(weight))
    }

    /// Binary-searches for the edge (`to`, `weight`).
    pub(crate) fn search<N: Ord>(
        &self,
        nodes: &NodeStore<N>,
        to: NodeId,
        weight: &E,
    ) -> Result<usize, usize> {
        self.edges
            .binary_search_by(|edge| Self::compare(nodes, edge, to, weight))
    }

    /// Inserts the edge (`to`, `weight`) unless it is already stored.
    pub(crate) fn insert<N: Ord>(&mut self, nodes: &NodeStore<N>, to: NodeId, weight: E) -> bool {
        match self.search(nodes, to, &weight) {
            Ok(_) => false,
            Err(index) => {
                self.edges.insert(index, Edge { to, weight });
                true
            }
        }
    }

    /// Removes the edge (`to`, `weight`), returning its weight if it was stored.
    pub(crate) fn remove<N: Ord>(
        &mut self,
        nodes: &NodeStore<N>,
        to: NodeId,
        weight: &E,
    ) -> Option<E> {
        let index = self.search(nodes, to, weight).ok()?;
        Some(self.edges.remove(index).weight)
    }

    /// Returns the contiguous run of edges pointing at `to`, ordered by weight.
    #[must_use]
    pub(crate) fn to_range<N: Ord>(&self, nodes: &NodeStore<N>, to: NodeId) -> &[Edge<E>] {
        let target = nodes.value(to);
        let start = self
            .edges
            .partition_point(|edge| nodes.value(edge.to) < target);
        let len = self.edges[start..]
            .partition_point(|edge| nodes.value(edge.to) == target);
        &self.edges[start..start + len]
    }

    /// Restores ordering after the value behind `renamed` changed.
    ///
    /// Returns true if the list referenced `renamed` and was re-sorted.
    pub(crate) fn resort<N: Ord>(&mut self, nodes: &NodeStore<N>, renamed: NodeId) -> bool {
        if !self.targets(renamed) {
            return false;
        }
        self.sort(nodes);
        true
    }

    /// Points every edge aimed at `from` to `to`, dropping resulting duplicates.
    ///
    /// Returns the number of duplicates dropped.
    pub(crate) fn retarget<N: Ord>(
        &mut self,
        nodes: &NodeStore<N>,
        from: NodeId,
        to: NodeId,
    ) -> usize {
        if !self.targets(from) {
            return 0;
        }
        self.remap(from, to);
        self.sort(nodes);

        let before = self.edges.len();
        self.edges
            .dedup_by(|later, earlier| later.to == earlier.to && later.weight == earlier.weight);
        before - self.edges.len()
    }

    fn sort<N: Ord>(&mut self, nodes: &NodeStore<N>) {
        self.edges.sort_by(|a, b| Self::compare(nodes, a, b.to, &b.weight));
    }
}
