//! Weighted graph model
//!
//! This module implements the graph value type shared by the builders
//! and the analytics layer:
//! - Opaque string node identifiers interned in first-insertion order
//! - Directed and genuinely undirected (canonical-pair) orientations
//! - Positive integer edge weights, summed on repeat insertion

pub mod store;
pub mod types;

// Re-export main types
pub use store::{GraphError, GraphResult, TagGraph};
pub use types::{NodeIndex, Orientation};
