//! Node arena with a value-ordered index.
//!
//! Every distinct node value is stored exactly once, in `values`. Edges refer
//! to nodes through [`NodeId`] handles into that arena, so renaming a node is
//! a single in-place update seen by every edge that points at it.
//!
//! The traversal order (ascending node value) is kept separately in `order`,
//! whose positions are the node *ranks* used by edge cursors.

use std::borrow::Borrow;

/// Handle to a node slot in the arena.
///
/// Handles stay valid until the node is erased. Erasing a node moves the last
/// slot into the freed one (see [`NodeStore::swap_remove`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    /// Returns the arena slot index.
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

/// Arena of node values plus the ascending-by-value index over it.
#[derive(Debug, Clone)]
pub(crate) struct NodeStore<N> {
    /// Node values addressed by `NodeId`.
    values: Vec<N>,
    /// Node ids sorted ascending by value; the position is the node rank.
    order: Vec<NodeId>,
}

impl<N> Default for NodeStore<N> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            order: Vec::new(),
        }
    }
}

impl<N> NodeStore<N> {
    /// Creates a node store with pre-allocated capacity.
    #[must_use]
    pub(crate) fn with_capacity(expected_nodes: usize) -> Self {
        Self {
            values: Vec::with_capacity(expected_nodes),
            order: Vec::with_capacity(expected_nodes),
        }
    }

    /// Returns the number of stored nodes.
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no node is stored.
    #[must_use]
    pub(crate) fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value stored for `id`.
    #[must_use]
    pub(crate) fn value(&self, id: NodeId) -> &N {
        &self.values[id.0]
    }

    /// Returns the id of the node at `rank` in ascending value order.
    #[must_use]
    pub(crate) fn id_at(&self, rank: usize) -> Option<NodeId> {
        self.order.get(rank).copied()
    }

    /// Iterates over node ids in ascending value order.
    pub(crate) fn ids(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.order.iter().copied()
    }

    /// Iterates over node values in ascending order.
    pub(crate) fn iter(&self) -> impl DoubleEndedIterator<Item = &N> + '_ {
        self.order.iter().map(|id| &self.values[id.0])
    }

    /// Removes every node.
    pub(crate) fn clear(&mut self) {
        self.values.clear();
        self.order.clear();
    }
}

impl<N: Ord> NodeStore<N> {
    /// Binary-searches the index for `value`.
    ///
    /// `Ok(rank)` if stored, `Err(rank)` with the insertion rank otherwise.
    pub(crate) fn search<Q>(&self, value: &Q) -> Result<usize, usize>
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.order
            .binary_search_by(|id| self.values[id.0].borrow().cmp(value))
    }

    /// Looks up `value`, returning its rank and id.
    #[must_use]
    pub(crate) fn get<Q>(&self, value: &Q) -> Option<(usize, NodeId)>
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(value).ok().map(|rank| (rank, self.order[rank]))
    }

    /// Returns true if a node equal to `value` is stored.
    #[must_use]
    pub(crate) fn contains<Q>(&self, value: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(value).is_ok()
    }

    /// Returns the rank of a stored node.
    #[must_use]
    pub(crate) fn rank_of(&self, id: NodeId) -> usize {
        match self.search::<N>(self.value(id)) {
            Ok(rank) | Err(rank) => rank,
        }
    }

    /// Stores `value` unless an equal node exists.
    ///
    /// Returns the id of the new node, or `None` if `value` was already stored.
    pub(crate) fn insert(&mut self, value: N) -> Option<NodeId> {
        let rank = self.search(&value).err()?;
        let id = NodeId(self.values.len());
        self.values.push(value);
        self.order.insert(rank, id);
        Some(id)
    }

    /// Replaces the value of `id` in place, keeping the id.
    ///
    /// The caller guarantees no other node equals `value`.
    pub(crate) fn rename(&mut self, id: NodeId, value: N) -> N {
        let old_rank = self.rank_of(id);
        self.order.remove(old_rank);
        let old = std::mem::replace(&mut self.values[id.0], value);
        let new_rank = match self.search::<N>(&self.values[id.0]) {
            Ok(rank) | Err(rank) => rank,
        };
        self.order.insert(new_rank, id);
        old
    }

    /// Removes `id` by moving the last arena slot into its place.
    ///
    /// Returns the removed value and, if a slot was moved, the id it had
    /// before the move. Every edge pointing at that old id must be remapped
    /// to `id` by the caller.
    pub(crate) fn swap_remove(&mut self, id: NodeId) -> (N, Option<NodeId>) {
        let last = NodeId(self.values.len() - 1);
        let rank = self.rank_of(id);
        let last_rank = self.rank_of(last);

        self.order.remove(rank);
        let value = self.values.swap_remove(id.0);
        if last == id {
            return (value, None);
        }

        let last_rank = if last_rank > rank {
            last_rank - 1
        } else {
            last_rank
        };
        self.order[last_rank] = id;
        (value, Some(last))
    }
}
