//! Structural graph metrics
//!
//! A fixed record computed from scratch per request: size, density,
//! connectivity, clustering and degree statistics. Every field
//! degrades to a well-defined zero/false for degenerate graphs.

use super::build_view;
use crate::graph::{Orientation, TagGraph};
use serde::Serialize;
use tagnet_graph_algorithms::{average_clustering, is_connected, GraphView};
use tracing::debug;

/// Degree statistics, shaped by the graph's orientation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DegreeStats {
    Directed {
        avg_in_degree: f64,
        max_in_degree: u64,
        avg_out_degree: f64,
        max_out_degree: u64,
    },
    Undirected {
        avg_degree: f64,
        max_degree: u64,
    },
}

/// Structural metrics for one graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphMetrics {
    pub node_count: usize,
    pub edge_count: usize,
    /// Fraction of possible edges present; 0 for graphs with < 2 nodes
    pub density: f64,
    /// Weak connectivity for directed graphs, plain connectivity for
    /// undirected; false for the empty graph
    pub connected: bool,
    /// Average local clustering coefficient on the undirected projection
    pub average_clustering: f64,
    #[serde(flatten)]
    pub degrees: DegreeStats,
}

/// Compute the full metrics record for a graph.
pub fn compute_metrics(graph: &TagGraph) -> GraphMetrics {
    let view = build_view(graph);
    let n = graph.node_count();
    let e = graph.edge_count();

    let density = if n < 2 {
        0.0
    } else {
        let possible = match graph.orientation() {
            Orientation::Directed => (n * (n - 1)) as f64,
            Orientation::Undirected => (n * (n - 1)) as f64 / 2.0,
        };
        e as f64 / possible
    };

    let metrics = GraphMetrics {
        node_count: n,
        edge_count: e,
        density,
        connected: is_connected(&view),
        average_clustering: average_clustering(&view),
        degrees: degree_stats(graph, &view),
    };
    debug!(orientation = %graph.orientation(), nodes = n, edges = e, "computed graph metrics");
    metrics
}

fn degree_stats(graph: &TagGraph, view: &GraphView) -> DegreeStats {
    let n = view.node_count;

    match graph.orientation() {
        Orientation::Directed => {
            let mut in_total = 0u64;
            let mut out_total = 0u64;
            let mut in_max = 0u64;
            let mut out_max = 0u64;
            for idx in 0..n {
                let din = view.in_degree(idx) as u64;
                let dout = view.out_degree(idx) as u64;
                in_total += din;
                out_total += dout;
                in_max = in_max.max(din);
                out_max = out_max.max(dout);
            }
            let denom = if n == 0 { 1.0 } else { n as f64 };
            DegreeStats::Directed {
                avg_in_degree: in_total as f64 / denom,
                max_in_degree: in_max,
                avg_out_degree: out_total as f64 / denom,
                max_out_degree: out_max,
            }
        }
        Orientation::Undirected => {
            // Symmetric view: out-degree is the plain degree
            let mut total = 0u64;
            let mut max = 0u64;
            for idx in 0..n {
                let d = view.out_degree(idx) as u64;
                total += d;
                max = max.max(d);
            }
            let denom = if n == 0 { 1.0 } else { n as f64 };
            DegreeStats::Undirected {
                avg_degree: total as f64 / denom,
                max_degree: max,
            }
        }
    }
}
