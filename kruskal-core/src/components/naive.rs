//! Component tracking by explicit relabeling.

use tracing::trace;

use super::ComponentTracker;
use crate::edge::VertexId;

/// Tracks components as a vertex → component id table.
///
/// A merge rewrites the id of every vertex in the absorbed component, costing
/// `O(vertex_count)` per merge. It serves as the baseline the disjoint-set
/// union is measured against.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NaiveTracker {
    component: Vec<VertexId>,
    components: usize,
}

impl NaiveTracker {
    /// Creates a tracker with `vertex_count` singleton components.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            component: (0..vertex_count).collect(),
            components: vertex_count,
        }
    }

    /// Returns the component id currently assigned to `vertex`.
    #[must_use]
    pub fn component_of(&self, vertex: VertexId) -> VertexId {
        self.component[vertex]
    }
}

impl ComponentTracker for NaiveTracker {
    fn with_vertex_count(vertex_count: usize) -> Self {
        Self::new(vertex_count)
    }

    fn connected(&mut self, left: VertexId, right: VertexId) -> bool {
        self.component[left] == self.component[right]
    }

    fn merge(&mut self, left: VertexId, right: VertexId) -> bool {
        let new_id = self.component[left];
        let old_id = self.component[right];
        if new_id == old_id {
            return false;
        }

        let mut relabelled = 0_usize;
        for id in self.component.iter_mut().filter(|id| **id == old_id) {
            *id = new_id;
            relabelled += 1;
        }
        self.components -= 1;
        trace!(old_id, new_id, relabelled, "relabelled component");
        true
    }

    fn component_count(&self) -> usize {
        self.components
    }
}
