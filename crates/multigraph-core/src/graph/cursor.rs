//! Edge cursor: a position in the flattened (source, destination, weight)
//! traversal of a two-level ordered structure.
//!
//! A cursor is a plain value. It does not borrow the graph, so it can be handed
//! back to mutating operations such as [`Graph::erase_edge_at`]. Any structural
//! mutation invalidates every cursor obtained earlier; using one afterwards is
//! a caller error. It never reads freed memory, but it may denote a different
//! edge or no edge at all.
//!
//! [`Graph::erase_edge_at`]: crate::Graph::erase_edge_at

/// Shape of a nested ordered structure: outer slots, each with inner elements.
///
/// The graph is the outer level (nodes by rank) over inner edge lists. Out of
/// range outer positions must report an inner length of zero.
pub(crate) trait NestedLayout {
    /// Number of outer slots.
    fn outer_len(&self) -> usize;

    /// Number of inner elements in outer slot `outer`.
    fn inner_len(&self, outer: usize) -> usize;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
enum Position {
    /// Value-initialised cursor, denotes nothing.
    #[default]
    Singular,
    /// Edge number `edge` of the node with rank `rank`.
    Edge { rank: usize, edge: usize },
    /// One past the last edge.
    End,
}

/// Bidirectional position over the edges of a [`Graph`](crate::Graph).
///
/// Obtained from [`Graph::begin`](crate::Graph::begin),
/// [`Graph::end`](crate::Graph::end) or [`Graph::find`](crate::Graph::find),
/// and moved with [`Graph::next_cursor`](crate::Graph::next_cursor) /
/// [`Graph::prev_cursor`](crate::Graph::prev_cursor).
///
/// `EdgeCursor::default()` is singular: it only compares equal to another
/// default cursor and never to a cursor produced by a graph.
///
/// # Example
///
/// ```rust
/// use multigraph_core::{EdgeCursor, Graph};
///
/// let mut g: Graph<&str, i32> = Graph::from(["A", "B"]);
/// g.insert_edge("A", "B", 14).unwrap();
///
/// let first = g.begin();
/// assert_ne!(first, g.end());
/// assert_eq!(g.next_cursor(first), g.end());
/// assert_ne!(EdgeCursor::default(), g.end());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EdgeCursor {
    pos: Position,
}

impl EdgeCursor {
    pub(crate) const fn end() -> Self {
        Self { pos: Position::End }
    }

    pub(crate) const fn at(rank: usize, edge: usize) -> Self {
        Self {
            pos: Position::Edge { rank, edge },
        }
    }

    /// Returns true if this is a past-the-end cursor.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self.pos, Position::End)
    }

    /// Returns true if this cursor was value-initialised.
    #[must_use]
    pub const fn is_singular(&self) -> bool {
        matches!(self.pos, Position::Singular)
    }

    /// Returns `(rank, edge)` if the cursor denotes an element of `layout`.
    pub(crate) fn locate<L: NestedLayout + ?Sized>(self, layout: &L) -> Option<(usize, usize)> {
        match self.pos {
            Position::Edge { rank, edge } if edge < layout.inner_len(rank) => Some((rank, edge)),
            _ => None,
        }
    }

    /// First element at or after outer slot `rank`, skipping empty slots.
    pub(crate) fn first_from<L: NestedLayout + ?Sized>(layout: &L, rank: usize) -> Self {
        (rank..layout.outer_len())
            .find(|&r| layout.inner_len(r) > 0)
            .map_or(Self::end(), |r| Self::at(r, 0))
    }

    /// Last element strictly before outer slot `rank`, skipping empty slots.
    fn last_before<L: NestedLayout + ?Sized>(layout: &L, rank: usize) -> Option<Self> {
        (0..rank.min(layout.outer_len()))
            .rev()
            .find(|&r| layout.inner_len(r) > 0)
            .map(|r| Self::at(r, layout.inner_len(r) - 1))
    }

    /// Steps forward one element.
    ///
    /// Past-the-end and singular cursors are returned unchanged.
    #[must_use]
    pub(crate) fn advance<L: NestedLayout + ?Sized>(self, layout: &L) -> Self {
        match self.pos {
            Position::Edge { rank, edge } => {
                if edge + 1 < layout.inner_len(rank) {
                    Self::at(rank, edge + 1)
                } else {
                    Self::first_from(layout, rank + 1)
                }
            }
            Position::End | Position::Singular => self,
        }
    }

    /// Steps back one element.
    ///
    /// Stepping back from the first element (or from `end()` of a graph
    /// without edges) yields a singular cursor.
    #[must_use]
    pub(crate) fn retreat<L: NestedLayout + ?Sized>(self, layout: &L) -> Self {
        let stepped = match self.pos {
            Position::Edge { rank, edge } if edge > 0 => Some(Self::at(rank, edge - 1)),
            Position::Edge { rank, .. } => Self::last_before(layout, rank),
            Position::End => Self::last_before(layout, layout.outer_len()),
            Position::Singular => None,
        };
        stepped.unwrap_or_default()
    }
}
