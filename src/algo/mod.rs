//! Graph analytics module
//!
//! Algorithms are implemented in the `tagnet-graph-algorithms` crate
//! over a dense CSR view; this module provides the integration/adapter
//! layer from [`TagGraph`] plus the metrics and centrality surfaces.

use crate::graph::{Orientation, TagGraph};
use tagnet_graph_algorithms::GraphView;

pub mod centrality;
pub mod metrics;

pub use centrality::{centrality, CentralityKind, CentralityScores};
pub use metrics::{compute_metrics, DegreeStats, GraphMetrics};

// Re-export algorithms
pub use tagnet_graph_algorithms::{
    average_clustering, betweenness_centrality, closeness_centrality, connected_components,
    eigenvector_centrality, is_connected, EigenvectorConfig, EigenvectorResult,
};

/// Build a dense CSR view of the graph for algorithm execution.
///
/// Undirected graphs are presented symmetrically: both directions of
/// every canonical pair are materialized, so traversal algorithms can
/// follow successors only. Edge weights ride along as f64.
pub fn build_view(graph: &TagGraph) -> GraphView {
    let node_count = graph.node_count();

    let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    let mut weights: Vec<Vec<f64>> = vec![Vec::new(); node_count];

    let symmetric = graph.orientation() == Orientation::Undirected;
    for (a, b, w) in graph.edges() {
        let (a, b) = (a.as_usize(), b.as_usize());
        outgoing[a].push(b);
        incoming[b].push(a);
        weights[a].push(w as f64);

        if symmetric && a != b {
            outgoing[b].push(a);
            incoming[a].push(b);
            weights[b].push(w as f64);
        }
    }

    GraphView::from_adjacency_list(node_count, outgoing, incoming, Some(weights))
}
