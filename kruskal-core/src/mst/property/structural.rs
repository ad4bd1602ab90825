//! Structural invariants of the produced forest.
//!
//! - **Acyclicity**: no accepted edge joins two already connected vertices.
//! - **Edge count**: exactly `V - C` edges, `C` being the component count of
//!   the input graph.
//! - **Order**: edges appear in ascending weight order.
//! - **Provenance**: every accepted edge is present in the normalized input.
//! - **Dedup**: the normalized input holds one edge per `(from, to)` pair.

use std::collections::HashSet;

use kruskal_test_support::graphs::RawGraph;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::test_utils::raw_edges;
use crate::{ComponentTracker, DisjointSet, Edge, Graph, Strategy};

/// Runs the structural invariant property for `graph`.
pub(super) fn run_structural_property(graph: &RawGraph, strategy: Strategy) -> TestCaseResult {
    let mut built = Graph::from_edges(graph.vertex_count, raw_edges(graph))
        .map_err(|e| TestCaseError::fail(format!("graph rejected generated edges: {e}")))?;
    let normalized: Vec<Edge> = built.edges().to_vec();
    let forest = built.minimum_spanning_forest(strategy).clone();

    validate_dedup(&normalized)?;
    validate_order(forest.edges())?;
    validate_provenance(&normalized, forest.edges())?;
    validate_acyclicity(graph.vertex_count, forest.edges())?;

    let input_components = count_components(graph.vertex_count, &normalized);
    let expected = graph.vertex_count - input_components;
    if forest.edges().len() != expected {
        return Err(TestCaseError::fail(format!(
            "edge count {}, expected V - C = {expected} (V={}, C={input_components})",
            forest.edges().len(),
            graph.vertex_count,
        )));
    }
    if forest.component_count() != input_components {
        return Err(TestCaseError::fail(format!(
            "forest reports {} components, input has {input_components}",
            forest.component_count(),
        )));
    }
    Ok(())
}

fn validate_dedup(edges: &[Edge]) -> TestCaseResult {
    let mut seen = HashSet::new();
    for edge in edges {
        if !seen.insert(edge.pair()) {
            return Err(TestCaseError::fail(format!(
                "pair {:?} survived normalization twice",
                edge.pair()
            )));
        }
    }
    Ok(())
}

fn validate_order(edges: &[Edge]) -> TestCaseResult {
    match edges
        .windows(2)
        .position(|pair| matches!(pair, [left, right] if left.weight() > right.weight()))
    {
        Some(index) => Err(TestCaseError::fail(format!(
            "edges {index} and {} are out of weight order",
            index + 1
        ))),
        None => Ok(()),
    }
}

fn validate_provenance(normalized: &[Edge], accepted: &[Edge]) -> TestCaseResult {
    let known: HashSet<&Edge> = normalized.iter().collect();
    match accepted.iter().find(|edge| !known.contains(edge)) {
        Some(edge) => Err(TestCaseError::fail(format!(
            "accepted edge {edge} is not in the normalized input"
        ))),
        None => Ok(()),
    }
}

fn validate_acyclicity(vertex_count: usize, edges: &[Edge]) -> TestCaseResult {
    let mut set = DisjointSet::new(vertex_count);
    for (index, edge) in edges.iter().enumerate() {
        if !set.merge(edge.from(), edge.to()) {
            return Err(TestCaseError::fail(format!(
                "edge {index}: {edge} creates a cycle"
            )));
        }
    }
    Ok(())
}

/// Counts input components with a plain parent array, independent of the
/// trackers under test.
fn count_components(vertex_count: usize, edges: &[Edge]) -> usize {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    fn root(parent: &mut [usize], mut vertex: usize) -> usize {
        while parent[vertex] != vertex {
            parent[vertex] = parent[parent[vertex]];
            vertex = parent[vertex];
        }
        vertex
    }

    let mut components = vertex_count;
    for edge in edges {
        let from = root(&mut parent, edge.from());
        let to = root(&mut parent, edge.to());
        if from != to {
            parent[to] = from;
            components -= 1;
        }
    }
    components
}
