//! Graph aggregate with a lazily recomputed minimum spanning forest.
//!
//! [`Graph`] owns the vertex count and the normalized edge set. Every mutation
//! that changes either drops the cached forest; the next
//! [`Graph::minimum_spanning_forest`] call recomputes it and later calls return
//! the cached value untouched. Validation happens before any state changes, so
//! a rejected mutation never leaves the graph half-updated.

use tracing::{debug, instrument};

use crate::{
    edge::{Edge, VertexId, Weight},
    error::Result,
    mst::{MinimumSpanningForest, Strategy, run_strategy, validate_edges},
    store::EdgeStore,
};

/// An undirected weighted graph over vertices `0..vertex_count`.
///
/// Access is exclusive: mutations and recomputation take `&mut self`, so a
/// host sharing a graph across threads must wrap it in its own lock.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    vertex_count: usize,
    edges: EdgeStore,
    forest: Option<MinimumSpanningForest>,
}

impl Graph {
    /// Creates an edgeless graph over `vertex_count` vertices.
    #[must_use]
    pub const fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: EdgeStore::new(),
            forest: None,
        }
    }

    /// Creates a graph from `edges`, validating every endpoint.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::OutOfRangeVertex`] for the first edge with
    /// an endpoint outside `0..vertex_count`.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::{Edge, Graph};
    ///
    /// let graph = Graph::from_edges(3, vec![Edge::new(0, 1, 5), Edge::new(0, 1, 2)])?;
    /// assert_eq!(graph.edges(), &[Edge::new(0, 1, 2)]);
    /// assert!(Graph::from_edges(2, vec![Edge::new(0, 2, 1)]).is_err());
    /// # Ok::<(), kruskal_core::GraphError>(())
    /// ```
    pub fn from_edges(vertex_count: usize, edges: impl IntoIterator<Item = Edge>) -> Result<Self> {
        let edges = validate_edges(vertex_count, edges)?;
        Ok(Self {
            vertex_count,
            edges: EdgeStore::from_edges(edges),
            forest: None,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the normalized edge set.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { self.edges.as_slice() }

    /// Returns `true` when the next forest query will recompute.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_stale(&self) -> bool { self.forest.is_none() }

    /// Adds an edge and re-normalizes the edge set.
    ///
    /// Adding a pair that is already present keeps whichever copy is lighter;
    /// see [`EdgeStore::normalize`].
    ///
    /// # Errors
    /// Returns [`crate::GraphError::OutOfRangeVertex`] when `from` or `to` is
    /// not below the vertex count. The graph is left unchanged.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()> {
        let edge = Edge::new(from, to, weight);
        edge.validate(self.vertex_count)?;
        self.edges.push(edge);
        self.invalidate();
        Ok(())
    }

    /// Removes the first edge joining `from` to `to`, ignoring its weight.
    ///
    /// Returns the removed edge. The cached forest is only dropped when an
    /// edge was actually removed.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Option<Edge> {
        let removed = self.edges.remove(from, to)?;
        self.invalidate();
        Some(removed)
    }

    /// Replaces the vertex count and the whole edge set.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::OutOfRangeVertex`] for the first edge with
    /// an endpoint outside `0..vertex_count`. The graph is left unchanged.
    pub fn load(&mut self, vertex_count: usize, edges: impl IntoIterator<Item = Edge>) -> Result<()> {
        let edges = validate_edges(vertex_count, edges)?;
        self.vertex_count = vertex_count;
        self.edges.replace(edges);
        self.invalidate();
        Ok(())
    }

    /// Changes the vertex count.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::OutOfRangeVertex`] when a stored edge would
    /// fall outside the new range. The graph is left unchanged.
    pub fn set_vertex_count(&mut self, vertex_count: usize) -> Result<()> {
        if vertex_count == self.vertex_count {
            return Ok(());
        }
        for edge in &self.edges {
            edge.validate(vertex_count)?;
        }
        self.vertex_count = vertex_count;
        self.invalidate();
        Ok(())
    }

    /// Returns the minimum spanning forest, recomputing it only when stale.
    ///
    /// A cached forest is returned as-is whichever strategy produced it; both
    /// strategies accept the same edges in the same order.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::{Edge, Graph, Strategy};
    ///
    /// let mut graph = Graph::from_edges(
    ///     4,
    ///     vec![Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(2, 3, 3), Edge::new(0, 3, 4)],
    /// )?;
    /// let forest = graph.minimum_spanning_forest(Strategy::Naive);
    /// assert_eq!(forest.total_cost(), 6);
    /// assert_eq!(forest.edges().len(), 3);
    /// # Ok::<(), kruskal_core::GraphError>(())
    /// ```
    #[instrument(
        name = "graph.minimum_spanning_forest",
        level = "debug",
        skip(self),
        fields(vertex_count = self.vertex_count, edge_count = self.edges.len()),
    )]
    pub fn minimum_spanning_forest(&mut self, strategy: Strategy) -> &MinimumSpanningForest {
        let forest = match self.forest.take() {
            Some(cached) => {
                debug!("returning cached forest");
                #[cfg(feature = "metrics")]
                metrics::counter!("kruskal_mst_cache_hits").increment(1);
                cached
            }
            None => {
                let removed = self.edges.normalize();
                debug_assert_eq!(removed, 0, "stored edges are always normalized");
                run_strategy(strategy, self.vertex_count, self.edges.as_slice())
            }
        };
        self.forest.insert(forest)
    }

    fn invalidate(&mut self) {
        self.forest = None;
    }
}
