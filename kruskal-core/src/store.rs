//! Weight-ordered, duplicate-free edge storage.
//!
//! Every structural mutation re-normalizes the store, so readers always
//! observe edges in ascending weight order with at most one edge per
//! `(from, to)` pair. Bounds checking is the caller's concern; see
//! [`crate::Graph`].

use std::collections::HashSet;

use tracing::debug;

use crate::edge::{Edge, VertexId};

/// Holds a graph's edge set in normalized form.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EdgeStore {
    edges: Vec<Edge>,
}

impl EdgeStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Builds a store from `edges` and normalizes it once.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::{Edge, EdgeStore};
    ///
    /// let store = EdgeStore::from_edges(vec![Edge::new(0, 1, 5), Edge::new(0, 1, 2)]);
    /// assert_eq!(store.as_slice(), &[Edge::new(0, 1, 2)]);
    /// ```
    #[must_use]
    pub fn from_edges(edges: Vec<Edge>) -> Self {
        let mut store = Self { edges };
        store.normalize();
        store
    }

    /// Appends `edge` and re-normalizes.
    pub fn push(&mut self, edge: Edge) {
        self.edges.push(edge);
        self.normalize();
    }

    /// Removes the first edge whose pair equals `(from, to)`.
    ///
    /// The weight is not considered. Returns the removed edge, or `None` when
    /// no edge matched.
    pub fn remove(&mut self, from: VertexId, to: VertexId) -> Option<Edge> {
        let index = self
            .edges
            .iter()
            .position(|edge| edge.pair() == (from, to))?;
        // `Vec::remove` keeps the remaining edges sorted and unique.
        Some(self.edges.remove(index))
    }

    /// Replaces the whole edge set and normalizes it.
    pub fn replace(&mut self, edges: Vec<Edge>) {
        self.edges = edges;
        self.normalize();
    }

    /// Sorts edges by ascending weight and drops repeated `(from, to)` pairs.
    ///
    /// The sort is stable, so among equal weights earlier insertions come
    /// first. Deduplication keeps the first occurrence of every pair in the
    /// sorted order, which is the lightest copy when weights differ. Returns
    /// the number of edges dropped.
    pub fn normalize(&mut self) -> usize {
        self.edges.sort_by_key(Edge::weight);
        let before = self.edges.len();
        let mut seen = HashSet::with_capacity(before);
        self.edges.retain(|edge| seen.insert(edge.pair()));
        let removed = before.saturating_sub(self.edges.len());
        if removed > 0 {
            debug!(removed, remaining = self.edges.len(), "dropped duplicate edges");
        }
        removed
    }

    /// Returns the normalized edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn as_slice(&self) -> &[Edge] { &self.edges }

    /// Returns the number of stored edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` when the store holds no edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Iterates over the normalized edges.
    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }
}

impl<'a> IntoIterator for &'a EdgeStore {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
