//! Kruskal minimum spanning tree engine.
//!
//! The crate exposes an edge store that keeps edges sorted by weight and free
//! of duplicate `(from, to)` pairs, two interchangeable component trackers
//! (a naive relabeling tracker and a disjoint-set union), and a strategy
//! agnostic Kruskal driver. [`Graph`] ties these together and caches the last
//! computed forest until the edge set or vertex count changes.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the driver emits:
//!
//! - `kruskal_mst_computations` (counter, labelled by `strategy`)
//! - `kruskal_mst_cache_hits` (counter)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod components;
mod edge;
mod error;
mod graph;
mod mst;
mod store;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    components::{ComponentTracker, DisjointSet, NaiveTracker},
    edge::{Cost, Edge, VertexId, Weight},
    error::{GraphError, GraphErrorCode, Result},
    graph::Graph,
    mst::{MinimumSpanningForest, ParseStrategyError, Strategy, kruskal, kruskal_with},
    store::EdgeStore,
};
