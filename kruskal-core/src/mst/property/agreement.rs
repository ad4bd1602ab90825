//! Cross-strategy agreement and oracle equivalence.
//!
//! For any generated graph the naive tracker and the disjoint-set union must
//! accept the same edges in the same order, and their total cost must match
//! the Prim oracle.

use kruskal_test_support::graphs::RawGraph;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::test_utils::raw_edges;
use crate::{DisjointSet, NaiveTracker, kruskal};

use super::oracle::prim_forest;

/// Runs the agreement property for `graph`.
pub(super) fn run_agreement_property(graph: &RawGraph) -> TestCaseResult {
    let edges = raw_edges(graph);
    let context = || {
        format!(
            "(shape={:?}, vertices={}, edges={})",
            graph.shape,
            graph.vertex_count,
            edges.len()
        )
    };

    let naive = kruskal::<NaiveTracker>(graph.vertex_count, edges.iter().copied())
        .map_err(|e| TestCaseError::fail(format!("naive kruskal failed: {e} {}", context())))?;
    let dsu = kruskal::<DisjointSet>(graph.vertex_count, edges.iter().copied())
        .map_err(|e| TestCaseError::fail(format!("dsu kruskal failed: {e} {}", context())))?;

    if naive != dsu {
        return Err(TestCaseError::fail(format!(
            "strategies disagree: naive={:?}, dsu={:?} {}",
            naive.edges(),
            dsu.edges(),
            context(),
        )));
    }

    let oracle = prim_forest(graph.vertex_count, &edges);
    if naive.total_cost() != oracle.total_cost {
        return Err(TestCaseError::fail(format!(
            "total cost mismatch: kruskal={}, oracle={} {}",
            naive.total_cost(),
            oracle.total_cost,
            context(),
        )));
    }
    if naive.edges().len() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: kruskal={}, oracle={} {}",
            naive.edges().len(),
            oracle.edge_count,
            context(),
        )));
    }
    if naive.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: kruskal={}, oracle={} {}",
            naive.component_count(),
            oracle.component_count,
            context(),
        )));
    }

    Ok(())
}
