//! Disjoint-set union with path compression and union by rank.

use super::ComponentTracker;
use crate::edge::VertexId;

/// Union-find over `0..vertex_count`.
///
/// `find_set` compresses paths iteratively in two passes, so deep parent
/// chains never recurse. `union_sets` attaches the lower-rank root beneath the
/// higher-rank one; on a tie the root of the left argument survives and its
/// rank grows by one. Ranks bound subtree height and are only consulted for
/// roots.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisjointSet {
    parent: Vec<VertexId>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates a forest of `vertex_count` singleton sets.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        let mut set = Self {
            parent: vec![0; vertex_count],
            rank: vec![0; vertex_count],
            components: vertex_count,
        };
        for vertex in 0..vertex_count {
            set.make_set(vertex);
        }
        set
    }

    /// Resets `vertex` to a singleton root of rank zero.
    ///
    /// Only meaningful on a vertex no other node points to; [`DisjointSet::new`]
    /// calls it once per vertex.
    pub fn make_set(&mut self, vertex: VertexId) {
        self.parent[vertex] = vertex;
        self.rank[vertex] = 0;
    }

    /// Returns the root of the set holding `vertex`, compressing the path.
    pub fn find_set(&mut self, mut vertex: VertexId) -> VertexId {
        let mut root = vertex;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[vertex] != vertex {
            let parent = self.parent[vertex];
            self.parent[vertex] = root;
            vertex = parent;
        }

        root
    }

    /// Joins the sets holding `left` and `right`.
    ///
    /// Returns the surviving root, or the shared root when both were already
    /// in the same set.
    pub fn union_sets(&mut self, left: VertexId, right: VertexId) -> VertexId {
        let mut left = self.find_set(left);
        let mut right = self.find_set(right);
        if left == right {
            return left;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        left
    }

    /// Returns the rank recorded for `vertex`.
    #[must_use]
    pub fn rank(&self, vertex: VertexId) -> u8 {
        self.rank[vertex]
    }
}

impl ComponentTracker for DisjointSet {
    fn with_vertex_count(vertex_count: usize) -> Self {
        Self::new(vertex_count)
    }

    fn connected(&mut self, left: VertexId, right: VertexId) -> bool {
        self.find_set(left) == self.find_set(right)
    }

    fn merge(&mut self, left: VertexId, right: VertexId) -> bool {
        let before = self.components;
        self.union_sets(left, right);
        self.components != before
    }

    fn component_count(&self) -> usize {
        self.components
    }
}
