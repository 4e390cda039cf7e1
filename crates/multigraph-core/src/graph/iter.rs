//! Borrowing edge iterator.

use std::iter::FusedIterator;

use super::container::Graph;
use super::cursor::EdgeCursor;
use super::types::EdgeRef;

/// Iterator over the edges of a [`Graph`] in traversal order.
///
/// Created by [`Graph::iter`]. Walks the same cursor sequence as
/// `begin()` / `next_cursor()`; `next_back` walks `prev_cursor()` from `end()`.
#[derive(Debug)]
pub struct Edges<'a, N, E> {
    graph: &'a Graph<N, E>,
    front: EdgeCursor,
    back: EdgeCursor,
    remaining: usize,
}

impl<N, E> Clone for Edges<'_, N, E> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, N, E> Edges<'a, N, E> {
    pub(super) fn new(graph: &'a Graph<N, E>) -> Self {
        Self {
            graph,
            front: graph.begin(),
            back: graph.end(),
            remaining: graph.edge_count(),
        }
    }
}

impl<'a, N, E> Iterator for Edges<'a, N, E> {
    type Item = EdgeRef<'a, N, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.graph.get(self.front)?;
        self.front = self.graph.next_cursor(self.front);
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<N, E> DoubleEndedIterator for Edges<'_, N, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.back = self.graph.prev_cursor(self.back);
        self.remaining -= 1;
        self.graph.get(self.back)
    }
}

impl<N, E> ExactSizeIterator for Edges<'_, N, E> {}

impl<N, E> FusedIterator for Edges<'_, N, E> {}
