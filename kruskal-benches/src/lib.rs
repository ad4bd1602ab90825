//! Benchmark support crate for the Kruskal workspace.
//!
//! Provides parameter types and synthetic inputs shared by the Criterion
//! benchmarks comparing the two cycle-detection strategies.

pub mod params;

use kruskal_core::Edge;
use kruskal_test_support::graphs::{RawGraph, random_graph};

/// Seed used for every synthetic graph so runs stay comparable.
pub const SEED: u64 = 42;

/// Generates a connected benchmark graph and converts it into core edges.
///
/// # Examples
/// ```
/// use kruskal_benches::{bench_edges, params::MstBenchParams};
///
/// let params = MstBenchParams { vertex_count: 16, edges_per_vertex: 4 };
/// let (vertex_count, edges) = bench_edges(&params);
/// assert_eq!(vertex_count, 16);
/// assert!(edges.len() >= 15);
/// ```
#[must_use]
pub fn bench_edges(params: &params::MstBenchParams) -> (usize, Vec<Edge>) {
    let raw = random_graph(params.vertex_count, params.edges_per_vertex, SEED);
    (raw.vertex_count, to_edges(&raw))
}

fn to_edges(raw: &RawGraph) -> Vec<Edge> {
    raw.edges
        .iter()
        .map(|&(from, to, weight)| Edge::new(from, to, weight))
        .collect()
}
