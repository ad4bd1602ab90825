//! Component tracking used by the Kruskal driver for cycle detection.
//!
//! Two interchangeable implementations are provided: [`NaiveTracker`], which
//! relabels every member of a component on merge, and [`DisjointSet`], a
//! union-find with path compression and union by rank. Both expose the same
//! observable partition, so the driver stays agnostic of which one it runs.

mod naive;
mod union_find;

pub use self::{naive::NaiveTracker, union_find::DisjointSet};

use crate::edge::VertexId;

/// Partition of `0..vertex_count` into connected components.
///
/// Every vertex starts in its own singleton component. Callers must only pass
/// vertex ids below the count supplied to [`ComponentTracker::with_vertex_count`];
/// [`crate::Graph`] guarantees this for every edge it stores.
pub trait ComponentTracker {
    /// Creates a tracker over `vertex_count` singleton components.
    fn with_vertex_count(vertex_count: usize) -> Self
    where
        Self: Sized;

    /// Returns `true` when `left` and `right` share a component.
    fn connected(&mut self, left: VertexId, right: VertexId) -> bool;

    /// Merges the components holding `left` and `right`.
    ///
    /// Returns `false`, leaving the partition untouched, when both vertices
    /// were already connected.
    fn merge(&mut self, left: VertexId, right: VertexId) -> bool;

    /// Returns the current number of components.
    fn component_count(&self) -> usize;
}
