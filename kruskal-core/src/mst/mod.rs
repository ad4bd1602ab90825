//! Sequential Kruskal minimum spanning tree/forest construction.
//!
//! The driver walks a normalized edge list in ascending weight order and asks
//! a [`ComponentTracker`] whether each edge would close a cycle. Both tracker
//! implementations produce the same partition after every step, so the
//! accepted edges and total cost never depend on the chosen [`Strategy`].

use std::{fmt, str::FromStr};

use thiserror::Error;
use tracing::{Span, field, instrument};

use crate::{
    components::{ComponentTracker, DisjointSet, NaiveTracker},
    edge::{Cost, Edge},
    error::Result,
    store::EdgeStore,
};

/// Cycle-detection strategy used by the Kruskal driver.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Strategy {
    /// Relabel every vertex of the absorbed component on merge.
    Naive,
    /// Union-find with path compression and union by rank.
    #[default]
    DisjointSet,
}

impl Strategy {
    /// Every supported strategy, in declaration order.
    pub const ALL: [Self; 2] = [Self::Naive, Self::DisjointSet];

    /// Returns the stable label used in logs, metrics and the CLI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::DisjointSet => "disjoint-set",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a strategy label is not recognised.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown strategy `{provided}`; expected `naive` or `disjoint-set`")]
pub struct ParseStrategyError {
    provided: String,
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "naive" => Ok(Self::Naive),
            "disjoint-set" | "dsu" => Ok(Self::DisjointSet),
            other => Err(ParseStrategyError {
                provided: other.to_owned(),
            }),
        }
    }
}

/// The output of a minimum spanning forest computation.
///
/// Edges are kept in acceptance order, which is ascending weight. When the
/// input graph is connected the forest is a minimum spanning tree.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MinimumSpanningForest {
    edges: Vec<Edge>,
    total_cost: Cost,
    vertex_count: usize,
    component_count: usize,
}

impl MinimumSpanningForest {
    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_cost(&self) -> Cost { self.total_cost }

    /// Returns the number of vertices the forest spans.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of connected components in the forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns `true` when no edge was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Computes a minimum spanning forest with the tracker `T`.
///
/// `edges` may arrive in any order and may repeat `(from, to)` pairs; they are
/// normalized exactly as [`EdgeStore`] does before the pass. A zero vertex
/// count or an empty edge set yields an empty forest.
///
/// # Errors
/// Returns [`crate::GraphError::OutOfRangeVertex`] when an edge endpoint is not below
/// `vertex_count`.
///
/// # Examples
/// ```
/// use kruskal_core::{Edge, NaiveTracker, kruskal};
///
/// let edges = [Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(0, 2, 3)];
/// let forest = kruskal::<NaiveTracker>(3, edges)?;
/// assert_eq!(forest.total_cost(), 3);
/// assert!(forest.is_tree());
/// # Ok::<(), kruskal_core::GraphError>(())
/// ```
pub fn kruskal<T: ComponentTracker>(
    vertex_count: usize,
    edges: impl IntoIterator<Item = Edge>,
) -> Result<MinimumSpanningForest> {
    let edges = validate_edges(vertex_count, edges)?;
    let store = EdgeStore::from_edges(edges);
    Ok(run_pass::<T>(vertex_count, store.as_slice()))
}

/// Computes a minimum spanning forest with the tracker selected by `strategy`.
///
/// # Errors
/// Returns [`crate::GraphError::OutOfRangeVertex`] when an edge endpoint is not below
/// `vertex_count`.
pub fn kruskal_with(
    strategy: Strategy,
    vertex_count: usize,
    edges: impl IntoIterator<Item = Edge>,
) -> Result<MinimumSpanningForest> {
    let edges = validate_edges(vertex_count, edges)?;
    let store = EdgeStore::from_edges(edges);
    Ok(run_strategy(strategy, vertex_count, store.as_slice()))
}

pub(crate) fn validate_edges(
    vertex_count: usize,
    edges: impl IntoIterator<Item = Edge>,
) -> Result<Vec<Edge>> {
    edges
        .into_iter()
        .map(|edge| edge.validate(vertex_count).map(|()| edge))
        .collect()
}

/// Runs one Kruskal pass over already normalized, validated edges.
#[instrument(
    name = "kruskal.run",
    skip(edges),
    fields(edge_count = edges.len(), accepted = field::Empty, total_cost = field::Empty),
)]
pub(crate) fn run_strategy(
    strategy: Strategy,
    vertex_count: usize,
    edges: &[Edge],
) -> MinimumSpanningForest {
    #[cfg(feature = "metrics")]
    metrics::counter!("kruskal_mst_computations", "strategy" => strategy.as_str()).increment(1);

    let forest = match strategy {
        Strategy::Naive => run_pass::<NaiveTracker>(vertex_count, edges),
        Strategy::DisjointSet => run_pass::<DisjointSet>(vertex_count, edges),
    };

    let span = Span::current();
    span.record("accepted", forest.edges.len());
    span.record("total_cost", forest.total_cost);
    forest
}

pub(crate) fn run_pass<T: ComponentTracker>(
    vertex_count: usize,
    edges: &[Edge],
) -> MinimumSpanningForest {
    if edges.is_empty() {
        return MinimumSpanningForest {
            vertex_count,
            component_count: vertex_count,
            ..MinimumSpanningForest::default()
        };
    }

    let mut tracker = T::with_vertex_count(vertex_count);
    let mut accepted = Vec::with_capacity(vertex_count.saturating_sub(1).min(edges.len()));
    let mut total_cost: Cost = 0;

    for edge in edges {
        if tracker.connected(edge.from(), edge.to()) {
            continue;
        }
        total_cost += Cost::from(edge.weight());
        accepted.push(*edge);
        tracker.merge(edge.from(), edge.to());

        if tracker.component_count() == 1 {
            break;
        }
    }

    MinimumSpanningForest {
        edges: accepted,
        total_cost,
        vertex_count,
        component_count: tracker.component_count(),
    }
}


#[cfg(test)]
mod property;
