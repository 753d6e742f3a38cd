//! Clustering coefficients
//!
//! Local clustering is computed on the undirected projection: an edge
//! between two nodes exists if the view stores either direction.

use super::common::GraphView;
use std::collections::HashSet;

/// Local clustering coefficient per node.
///
/// For a node with `k` projected neighbors and `t` edges among them:
/// `2t / (k(k-1))`. Nodes with fewer than 2 neighbors contribute 0.
pub fn local_clustering(view: &GraphView) -> Vec<f64> {
    let n = view.node_count;

    let neighbor_sets: Vec<HashSet<usize>> = (0..n)
        .map(|v| {
            view.successors(v)
                .iter()
                .chain(view.predecessors(v).iter())
                .copied()
                .filter(|&w| w != v)
                .collect()
        })
        .collect();

    let mut coefficients = vec![0.0f64; n];
    for v in 0..n {
        let neighbors: Vec<usize> = neighbor_sets[v].iter().copied().collect();
        let k = neighbors.len();
        if k < 2 {
            continue;
        }

        let mut links = 0usize;
        for (i, &a) in neighbors.iter().enumerate() {
            for &b in &neighbors[i + 1..] {
                if neighbor_sets[a].contains(&b) {
                    links += 1;
                }
            }
        }

        coefficients[v] = 2.0 * links as f64 / (k * (k - 1)) as f64;
    }

    coefficients
}

/// Average of the local clustering coefficients; 0 for the empty view.
pub fn average_clustering(view: &GraphView) -> f64 {
    let n = view.node_count;
    if n == 0 {
        return 0.0;
    }
    local_clustering(view).iter().sum::<f64>() / n as f64
}
