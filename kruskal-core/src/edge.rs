//! Weighted undirected edge value type.

use std::fmt;

use crate::error::{GraphError, Result};

/// Index of a vertex in `0..vertex_count`.
pub type VertexId = usize;

/// Bounded integer edge weight.
pub type Weight = i32;

/// Accumulated weight of a forest.
///
/// A forest holds at most `vertex_count - 1` edges, so summing [`Weight`]
/// values into an `i64` cannot overflow for any addressable vertex count.
pub type Cost = i64;

/// A single weighted edge between two vertices.
///
/// Edges are compared for deduplication by their `(from, to)` pair only; the
/// weight plays no part in identity. Ordering for the Kruskal pass is by weight
/// alone and is applied with a stable sort so equal weights keep insertion
/// order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    from: VertexId,
    to: VertexId,
    weight: Weight,
}

impl Edge {
    /// Creates a new edge.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::Edge;
    ///
    /// let edge = Edge::new(0, 1, 5);
    /// assert_eq!(edge.pair(), (0, 1));
    /// assert_eq!(edge.weight(), 5);
    /// ```
    #[must_use]
    pub const fn new(from: VertexId, to: VertexId, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// Returns the first endpoint as supplied by the caller.
    #[must_use]
    #[rustfmt::skip]
    pub const fn from(&self) -> VertexId { self.from }

    /// Returns the second endpoint as supplied by the caller.
    #[must_use]
    #[rustfmt::skip]
    pub const fn to(&self) -> VertexId { self.to }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns the `(from, to)` pair that identifies the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn pair(&self) -> (VertexId, VertexId) { (self.from, self.to) }

    /// Returns `true` when both endpoints lie in `0..vertex_count`.
    #[must_use]
    pub const fn fits(&self, vertex_count: usize) -> bool {
        self.from < vertex_count && self.to < vertex_count
    }

    /// Checks that both endpoints lie in `0..vertex_count`.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRangeVertex`] naming the first endpoint, in
    /// `from`, `to` order, that is out of range.
    pub fn validate(&self, vertex_count: usize) -> Result<()> {
        [self.from, self.to]
            .into_iter()
            .find(|&vertex| vertex >= vertex_count)
            .map_or(Ok(()), |vertex| {
                Err(GraphError::OutOfRangeVertex {
                    vertex,
                    from: self.from,
                    to: self.to,
                    vertex_count,
                })
            })
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},w={})", self.from, self.to, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::both_inside(Edge::new(0, 2, 1), 3, None)]
    #[case::from_outside(Edge::new(3, 0, 1), 3, Some(3))]
    #[case::to_outside(Edge::new(0, 4, 1), 3, Some(4))]
    #[case::both_outside_reports_from(Edge::new(5, 4, 1), 3, Some(5))]
    #[case::no_vertices(Edge::new(0, 0, 1), 0, Some(0))]
    fn validate_names_first_offending_endpoint(
        #[case] edge: Edge,
        #[case] vertex_count: usize,
        #[case] offending: Option<usize>,
    ) {
        let result = edge.validate(vertex_count);
        assert_eq!(edge.fits(vertex_count), offending.is_none());
        match (result, offending) {
            (Ok(()), None) => {}
            (Err(GraphError::OutOfRangeVertex { vertex, .. }), Some(expected)) => {
                assert_eq!(vertex, expected);
            }
            (other, _) => panic!("unexpected validation outcome: {other:?}"),
        }
    }

    #[test]
    fn display_includes_weight() {
        assert_eq!(Edge::new(2, 7, -3).to_string(), "(2,7,w=-3)");
    }
}
