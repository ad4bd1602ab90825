//! Cache correctness under arbitrary mutation sequences.
//!
//! After every mutation the graph's forest must equal a fresh computation
//! over its current edges, and a second query without mutation must return
//! the identical value.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Graph, Strategy, kruskal_with};

use super::strategies::Mutation;

/// Applies `mutations` to an edgeless graph and checks the cache after each.
pub(super) fn run_caching_property(
    vertex_count: usize,
    mutations: &[Mutation],
    strategy: Strategy,
) -> TestCaseResult {
    let mut graph = Graph::new(vertex_count);

    for (step, mutation) in mutations.iter().enumerate() {
        let before = graph.edges().to_vec();
        let before_count = graph.vertex_count();
        let outcome = match *mutation {
            Mutation::Add(from, to, weight) => graph.add_edge(from, to, weight).is_ok(),
            Mutation::Remove(from, to) => graph.remove_edge(from, to).is_some(),
            Mutation::Resize(count) => graph.set_vertex_count(count).is_ok(),
        };
        if !outcome && (graph.edges() != before || graph.vertex_count() != before_count) {
            return Err(TestCaseError::fail(format!(
                "step {step}: failed {mutation:?} changed the graph"
            )));
        }

        let cached = graph.minimum_spanning_forest(strategy).clone();
        let fresh = kruskal_with(strategy, graph.vertex_count(), graph.edges().iter().copied())
            .map_err(|e| TestCaseError::fail(format!("step {step}: fresh run failed: {e}")))?;
        if cached != fresh {
            return Err(TestCaseError::fail(format!(
                "step {step}: stale forest after {mutation:?}: cached cost {}, fresh cost {}",
                cached.total_cost(),
                fresh.total_cost(),
            )));
        }

        let again = graph.minimum_spanning_forest(strategy).clone();
        if again != cached || graph.is_stale() {
            return Err(TestCaseError::fail(format!(
                "step {step}: repeated query changed the forest"
            )));
        }
    }
    Ok(())
}
