//! Shared test utilities for `kruskal-core`.

use kruskal_test_support::graphs::RawGraph;
use kruskal_test_support::profile::PropertyProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::Edge;

/// Builds a proptest configuration from the shared environment profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = PropertyProfile::load(default_cases);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Converts generated triples into [`Edge`] values.
#[must_use]
pub(crate) fn raw_edges(graph: &RawGraph) -> Vec<Edge> {
    graph
        .edges
        .iter()
        .map(|&(from, to, weight)| Edge::new(from, to, weight))
        .collect()
}
