//! Prim oracle for minimum spanning forest cost.
//!
//! Works on a dense matrix of the lightest weight per unordered vertex pair,
//! so it shares no code or data structures with the Kruskal driver. The
//! minimum forest cost is unique even when the forest itself is not, which
//! makes it a sound reference for any tie-breaking policy.

use crate::{Cost, Edge};

/// Cost and shape of the minimum spanning forest found by the oracle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct OracleForest {
    pub total_cost: Cost,
    pub edge_count: usize,
    pub component_count: usize,
}

/// Runs Prim's algorithm from every not-yet-reached vertex.
pub(super) fn prim_forest(vertex_count: usize, edges: &[Edge]) -> OracleForest {
    let mut lightest: Vec<Vec<Option<i32>>> = vec![vec![None; vertex_count]; vertex_count];
    for edge in edges {
        let (from, to) = edge.pair();
        if from == to {
            continue;
        }
        for (row, column) in [(from, to), (to, from)] {
            let slot = &mut lightest[row][column];
            *slot = Some(slot.map_or(edge.weight(), |w| w.min(edge.weight())));
        }
    }

    let mut reached = vec![false; vertex_count];
    let mut total_cost: Cost = 0;
    let mut edge_count = 0;
    let mut component_count = 0;

    for start in 0..vertex_count {
        if reached[start] {
            continue;
        }
        component_count += 1;
        reached[start] = true;
        let mut frontier: Vec<Option<i32>> = lightest[start].clone();

        while let Some((next, weight)) = frontier
            .iter()
            .enumerate()
            .filter(|&(vertex, _)| !reached[vertex])
            .filter_map(|(vertex, weight)| weight.map(|w| (vertex, w)))
            .min_by_key(|&(_, weight)| weight)
        {
            reached[next] = true;
            total_cost += Cost::from(weight);
            edge_count += 1;
            for (vertex, candidate) in lightest[next].iter().enumerate() {
                if let Some(candidate) = *candidate {
                    let slot = &mut frontier[vertex];
                    *slot = Some(slot.map_or(candidate, |w| w.min(candidate)));
                }
            }
        }
    }

    OracleForest {
        total_cost,
        edge_count,
        component_count,
    }
}
