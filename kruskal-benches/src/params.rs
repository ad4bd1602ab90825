//! Benchmark parameter types.

use std::fmt;

/// Size of a synthetic graph used by the MST benchmarks.
#[derive(Clone, Copy, Debug)]
pub struct MstBenchParams {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Average number of edges per vertex, including the spanning path.
    pub edges_per_vertex: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.vertex_count, self.edges_per_vertex)
    }
}
