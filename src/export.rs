//! Graph export records
//!
//! A pure serialization boundary for the external presentation layer:
//! node and edge records in the graph's own insertion order, no value
//! transformation.

use crate::graph::TagGraph;
use serde::{Deserialize, Serialize};

/// One exported node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    /// Total incident edge count (in + out for directed graphs)
    pub degree: u64,
}

/// One exported edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    pub weight: u64,
}

/// One exported ranking entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankEntry {
    pub id: String,
    pub score: f64,
}

/// Portable representation of a graph's nodes and edges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphExport {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl GraphExport {
    /// JSON rendering of the export, for hand-off to the presentation
    /// layer.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Serialize a graph's nodes and edges in insertion order.
pub fn export(graph: &TagGraph) -> GraphExport {
    let degrees = graph.degrees();

    let nodes = graph
        .nodes()
        .zip(degrees)
        .map(|(id, degree)| NodeRecord {
            id: id.to_string(),
            degree,
        })
        .collect();

    let edges = graph
        .edges()
        .map(|(a, b, weight)| EdgeRecord {
            source: graph.node(a).unwrap_or_default().to_string(),
            target: graph.node(b).unwrap_or_default().to_string(),
            weight,
        })
        .collect();

    GraphExport { nodes, edges }
}

/// Shape a ranked list as export records.
pub fn export_ranking(ranking: &[(String, f64)]) -> Vec<RankEntry> {
    ranking
        .iter()
        .map(|(id, score)| RankEntry {
            id: id.clone(),
            score: *score,
        })
        .collect()
}
