//! Property-based tests for the Kruskal driver and the cached graph.
//!
//! Checks that both component trackers accept identical edges, that the total
//! cost matches an independent Prim oracle, that the output is a spanning
//! forest of the input, and that the graph cache never serves a stale forest.

mod agreement;
mod caching;
mod oracle;
mod strategies;
mod structural;
