//! Plain-text edge lists in, plain-text spanning forests out.
//!
//! The input format is a vertex count on the first non-blank line followed by
//! one `from to weight` triple per line:
//!
//! ```text
//! 4
//! 0 1 1
//! 1 2 2
//! 2 3 3
//! 0 3 4
//! ```
//!
//! [`parse_graph`] and [`read_graph`] turn that into a validated
//! [`kruskal_core::Graph`]; [`write_forest`], [`print_edges`] and
//! [`print_forest`] render results.

mod errors;
mod loader;
mod writer;

pub use crate::{
    errors::TextProviderError,
    loader::{MAX_VERTEX_COUNT, parse_graph, read_graph},
    writer::{print_edges, print_forest, write_forest},
};
