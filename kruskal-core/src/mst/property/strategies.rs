//! Proptest strategies over generated graphs and graph mutations.

use kruskal_test_support::graphs::{GraphShape, RawGraph, generate};
use proptest::prelude::*;

/// One mutation applied to a [`crate::Graph`] by the caching property.
#[derive(Clone, Debug)]
pub(super) enum Mutation {
    /// Add `(from, to, weight)`; endpoints may fall outside the graph.
    Add(usize, usize, i32),
    /// Remove the pair `(from, to)`, present or not.
    Remove(usize, usize),
    /// Change the vertex count.
    Resize(usize),
}

/// Shapes weighted towards the ones that stress ties and duplicates.
pub(super) fn shape_strategy() -> impl Strategy<Value = GraphShape> {
    prop_oneof![
        2 => Just(GraphShape::Unique),
        3 => Just(GraphShape::ManyIdentical),
        2 => Just(GraphShape::Sparse),
        1 => Just(GraphShape::Dense),
        2 => Just(GraphShape::Disconnected),
        3 => Just(GraphShape::Duplicated),
    ]
}

/// Generated graphs of every shape.
pub(super) fn raw_graph_strategy() -> impl Strategy<Value = RawGraph> {
    (shape_strategy(), any::<u64>()).prop_map(|(shape, seed)| generate(shape, seed))
}

/// Mutation sequences over vertex ids in `0..=max_vertex`.
pub(super) fn mutations_strategy(max_vertex: usize) -> impl Strategy<Value = Vec<Mutation>> {
    let mutation = prop_oneof![
        6 => (0..=max_vertex, 0..=max_vertex, -20_i32..=20)
            .prop_map(|(from, to, weight)| Mutation::Add(from, to, weight)),
        3 => (0..=max_vertex, 0..=max_vertex).prop_map(|(from, to)| Mutation::Remove(from, to)),
        1 => (0..=max_vertex + 1).prop_map(Mutation::Resize),
    ];
    prop::collection::vec(mutation, 1..40)
}
