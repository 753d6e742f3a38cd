//! Closeness centrality
//!
//! Inverse average shortest-path distance, normalized by the fraction
//! of the graph each node can reach (Wasserman-Faust), so disconnected
//! graphs produce finite, comparable scores.

use super::common::GraphView;
use std::collections::VecDeque;

/// Closeness centrality for every node.
///
/// For a node reaching `r` other nodes at total distance `d`:
/// `(r / (n - 1)) * (r / d)`. A node that reaches no other node
/// scores 0. Distances follow outgoing edges with unit weight.
pub fn closeness_centrality(view: &GraphView) -> Vec<f64> {
    let n = view.node_count;
    if n < 2 {
        return vec![0.0; n];
    }

    let mut scores = vec![0.0f64; n];
    let mut dist = vec![-1i64; n];
    let mut queue = VecDeque::new();

    for source in 0..n {
        dist.fill(-1);
        dist[source] = 0;
        queue.clear();
        queue.push_back(source);

        let mut reached = 0u64;
        let mut total_distance = 0u64;

        while let Some(v) = queue.pop_front() {
            for &w in view.successors(v) {
                if dist[w] < 0 {
                    dist[w] = dist[v] + 1;
                    reached += 1;
                    total_distance += dist[w] as u64;
                    queue.push_back(w);
                }
            }
        }

        if reached > 0 && total_distance > 0 {
            let r = reached as f64;
            scores[source] = (r / (n - 1) as f64) * (r / total_distance as f64);
        }
    }

    scores
}
