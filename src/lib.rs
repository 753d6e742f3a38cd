//! Tagnet
//!
//! A batch graph-construction and analytics engine for streams of short
//! annotated documents (social-media posts carrying hashtag and mention
//! tags). Tagnet builds three weighted graphs from document tag data
//! and computes structural metrics and deterministic rankings over
//! them:
//!
//! - hashtag co-occurrence (undirected, canonical pairs)
//! - mention interaction (directed)
//! - user-hashtag association (directed bipartite)
//!
//! Document acquisition, durable storage and chart rendering are
//! external collaborators; the engine only consumes [`Document`]
//! values and hands back graph values, metric records and export
//! records. Graphs are built once and immutable afterwards, so every
//! analytics call is a pure function over a read-only structure.
//!
//! # Example Usage
//!
//! ```rust
//! use tagnet::{build_cooccurrence_graph, compute_metrics, centrality, top_n, CentralityKind, Document};
//!
//! let docs = vec![
//!     Document::from_text("d1", "u1", "shipping #rust #graphs today"),
//!     Document::from_text("d2", "u2", "more #rust #graphs and #analytics"),
//! ];
//!
//! let (graph, report) = build_cooccurrence_graph(&docs);
//! assert_eq!(report.processed, 2);
//! assert_eq!(graph.edge_weight("graphs", "rust"), Some(2));
//!
//! let metrics = compute_metrics(&graph);
//! assert!(metrics.density > 0.0);
//!
//! let scores = centrality(&graph, CentralityKind::Degree);
//! let top = top_n(&scores.scores, 2);
//! assert_eq!(top.len(), 2);
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod builder;
pub mod document;
pub mod export;
pub mod graph;
pub mod rank;

// Re-export main types for convenience
pub use algo::{
    build_view, centrality, compute_metrics, CentralityKind, CentralityScores, DegreeStats,
    EigenvectorConfig, GraphMetrics,
};
pub use builder::{
    build_association_graph, build_cooccurrence_graph, build_cooccurrence_graph_partitioned,
    build_mention_graph, merge_partials, BuildReport, MAX_TAGS_PER_DOCUMENT,
};
pub use document::{extract_hashtags, extract_mentions, Document};
pub use export::{export, export_ranking, EdgeRecord, GraphExport, NodeRecord, RankEntry};
pub use graph::{GraphError, GraphResult, NodeIndex, Orientation, TagGraph};
pub use rank::{top_n, top_n_by_centrality};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
