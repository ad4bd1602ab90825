//! Shared test utilities used across the kruskal crates.
//!
//! - [`tracing`] captures spans and events so tests can assert on
//!   instrumentation.
//! - [`profile`] reads property-test tuning from the environment.
//! - [`graphs`] builds seeded random edge lists in several shapes.

pub mod graphs;
pub mod profile;
pub mod tracing;
