//! Seeded random graph generators.
//!
//! Every generator returns a [`RawGraph`] of plain `(from, to, weight)`
//! triples so callers can feed them to whichever API they exercise. The
//! shapes stress different parts of a Kruskal implementation: tie handling,
//! sparse and dense inputs, duplicate pairs and disconnected components.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Minimum vertex count for generated graphs.
const MIN_VERTICES: usize = 8;
/// Maximum vertex count for generated graphs.
const MAX_VERTICES: usize = 64;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 32;
/// Weight range used when weights should rarely collide.
const WIDE_WEIGHTS: std::ops::RangeInclusive<i32> = -1_000..=1_000;

/// Topology and weight profile of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphShape {
    /// Random pairs with weights drawn from a wide range.
    Unique,
    /// Large groups of edges sharing one of a handful of weights.
    ManyIdentical,
    /// A random spanning tree plus roughly `0.5n..=n` extra edges.
    Sparse,
    /// Nearly complete graph.
    Dense,
    /// Two to five components with no edges between them.
    Disconnected,
    /// Random pairs where most pairs appear several times with new weights.
    Duplicated,
}

impl GraphShape {
    /// Every shape, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Unique,
        Self::ManyIdentical,
        Self::Sparse,
        Self::Dense,
        Self::Disconnected,
        Self::Duplicated,
    ];
}

/// A generated vertex count with its edge triples in generation order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawGraph {
    /// Number of vertices; every endpoint lies below it.
    pub vertex_count: usize,
    /// Edge triples `(from, to, weight)`.
    pub edges: Vec<(usize, usize, i32)>,
    /// Shape used to build the graph.
    pub shape: GraphShape,
}

/// Generates a graph of `shape` from a fixed `seed`.
///
/// # Examples
/// ```
/// use kruskal_test_support::graphs::{GraphShape, generate};
///
/// let graph = generate(GraphShape::Sparse, 7);
/// assert_eq!(graph, generate(GraphShape::Sparse, 7));
/// assert!(graph.edges.iter().all(|&(from, to, _)| from < graph.vertex_count && to < graph.vertex_count));
/// ```
#[must_use]
pub fn generate(shape: GraphShape, seed: u64) -> RawGraph {
    let mut rng = SmallRng::seed_from_u64(seed);
    generate_with(shape, &mut rng)
}

/// Generates a graph of `shape` drawing from `rng`.
pub fn generate_with(shape: GraphShape, rng: &mut SmallRng) -> RawGraph {
    let (vertex_count, edges) = match shape {
        GraphShape::Unique => probabilistic(rng, MAX_VERTICES, 0.2..=0.6, |r| {
            r.gen_range(WIDE_WEIGHTS)
        }),
        GraphShape::ManyIdentical => {
            let pool: Vec<i32> = (0..rng.gen_range(1..=3))
                .map(|_| rng.gen_range(1..=10))
                .collect();
            probabilistic(rng, MAX_VERTICES, 0.3..=0.7, move |r| {
                pool.choose(r).copied().unwrap_or(1)
            })
        }
        GraphShape::Sparse => sparse(rng),
        GraphShape::Dense => probabilistic(rng, DENSE_MAX_VERTICES, 0.7..=0.95, |r| {
            r.gen_range(WIDE_WEIGHTS)
        }),
        GraphShape::Disconnected => disconnected(rng),
        GraphShape::Duplicated => duplicated(rng),
    };
    RawGraph {
        vertex_count,
        edges,
        shape,
    }
}

/// Builds a graph of exactly `vertex_count` vertices and about
/// `edges_per_vertex * vertex_count` random edges.
///
/// Used by benchmarks that need to control size directly.
#[must_use]
pub fn random_graph(vertex_count: usize, edges_per_vertex: usize, seed: u64) -> RawGraph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut edges = spanning_path(&mut rng, vertex_count);
    if vertex_count >= 2 {
        let extra = vertex_count.saturating_mul(edges_per_vertex.saturating_sub(1));
        for _ in 0..extra {
            let from = rng.gen_range(0..vertex_count);
            let to = rng.gen_range(0..vertex_count);
            edges.push((from, to, rng.gen_range(WIDE_WEIGHTS)));
        }
    }
    RawGraph {
        vertex_count,
        edges,
        shape: GraphShape::Sparse,
    }
}

fn probabilistic(
    rng: &mut SmallRng,
    max_vertices: usize,
    probability: std::ops::RangeInclusive<f64>,
    mut weight: impl FnMut(&mut SmallRng) -> i32,
) -> (usize, Vec<(usize, usize, i32)>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let probability = rng.gen_range(probability);
    let mut edges = Vec::new();
    for from in 0..vertex_count {
        for to in (from + 1)..vertex_count {
            if rng.gen_bool(probability) {
                let w = weight(rng);
                edges.push(oriented(rng, from, to, w));
            }
        }
    }
    if edges.is_empty() {
        edges.push((0, 1, weight(rng)));
    }
    (vertex_count, edges)
}

fn sparse(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, i32)>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges = spanning_path(rng, vertex_count);
    let extra = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra {
        let from = rng.gen_range(0..vertex_count);
        let to = rng.gen_range(0..vertex_count);
        if from != to {
            edges.push((from, to, rng.gen_range(WIDE_WEIGHTS)));
        }
    }
    edges.shuffle(rng);
    (vertex_count, edges)
}

fn disconnected(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, i32)>) {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(1..=12))
        .collect();
    let mut edges = Vec::new();
    let mut offset = 0;
    for &size in &sizes {
        let probability = rng.gen_range(0.3..=0.8);
        let start = edges.len();
        for i in 0..size {
            for j in (i + 1)..size {
                if rng.gen_bool(probability) {
                    edges.push((offset + i, offset + j, rng.gen_range(1..=50)));
                }
            }
        }
        if size >= 2 && edges.len() == start {
            edges.push((offset, offset + 1, rng.gen_range(1..=50)));
        }
        offset += size;
    }
    (offset, edges)
}

fn duplicated(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, i32)>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES / 2);
    let base = spanning_path(rng, vertex_count);
    let mut edges = Vec::with_capacity(base.len() * 3);
    for &(from, to, _) in &base {
        for _ in 0..rng.gen_range(1..=3) {
            edges.push((from, to, rng.gen_range(1..=20)));
        }
    }
    for _ in 0..vertex_count {
        let from = rng.gen_range(0..vertex_count);
        let to = rng.gen_range(0..vertex_count);
        edges.push((from, to, rng.gen_range(1..=20)));
    }
    edges.shuffle(rng);
    (vertex_count, edges)
}

/// Connects every vertex along a random permutation.
fn spanning_path(rng: &mut SmallRng, vertex_count: usize) -> Vec<(usize, usize, i32)> {
    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(rng);
    order
        .windows(2)
        .filter_map(|pair| match *pair {
            [from, to] => Some((from, to, rng.gen_range(WIDE_WEIGHTS))),
            _ => None,
        })
        .collect()
}

fn oriented(rng: &mut SmallRng, low: usize, high: usize, weight: i32) -> (usize, usize, i32) {
    if rng.gen_bool(0.5) {
        (low, high, weight)
    } else {
        (high, low, weight)
    }
}
