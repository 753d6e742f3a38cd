//! Betweenness centrality (Brandes' algorithm)
//!
//! Exact computation via repeated single-source shortest-path
//! accumulation, treating every edge as unit weight. Source nodes are
//! processed in parallel; each pass only reads the shared view.

use super::common::GraphView;
use rayon::prelude::*;
use std::collections::VecDeque;

/// Betweenness centrality for every node, as the fraction of shortest
/// paths between other node pairs that pass through it.
///
/// Scores are normalized by the number of ordered pairs `(n-1)(n-2)`.
/// For a symmetric (undirected) view this counts every unordered pair
/// twice in both the accumulation and the normalization, so the
/// fractions come out the same as the undirected definition.
pub fn betweenness_centrality(view: &GraphView) -> Vec<f64> {
    let n = view.node_count;
    if n < 3 {
        return vec![0.0; n];
    }

    let accumulated = (0..n)
        .into_par_iter()
        .map(|source| single_source_dependencies(view, source))
        .reduce(
            || vec![0.0; n],
            |mut acc, dep| {
                for (a, d) in acc.iter_mut().zip(dep) {
                    *a += d;
                }
                acc
            },
        );

    let scale = 1.0 / ((n - 1) as f64 * (n - 2) as f64);
    accumulated.into_iter().map(|b| b * scale).collect()
}

/// One Brandes pass: BFS from `source`, then back-propagate pair
/// dependencies along the shortest-path DAG.
fn single_source_dependencies(view: &GraphView, source: usize) -> Vec<f64> {
    let n = view.node_count;

    let mut stack = Vec::with_capacity(n);
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut sigma = vec![0.0f64; n];
    let mut dist = vec![-1i64; n];
    let mut queue = VecDeque::new();

    sigma[source] = 1.0;
    dist[source] = 0;
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        stack.push(v);
        for &w in view.successors(v) {
            if dist[w] < 0 {
                dist[w] = dist[v] + 1;
                queue.push_back(w);
            }
            if dist[w] == dist[v] + 1 {
                sigma[w] += sigma[v];
                predecessors[w].push(v);
            }
        }
    }

    let mut delta = vec![0.0f64; n];
    let mut dependencies = vec![0.0f64; n];

    while let Some(w) = stack.pop() {
        for &v in &predecessors[w] {
            delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
        }
        if w != source {
            dependencies[w] = delta[w];
        }
    }

    dependencies
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph_view() -> GraphView {
        // Undirected path a - b - c presented symmetrically:
        // 0 <-> 1 <-> 2
        let outgoing = vec![vec![1], vec![0, 2], vec![1]];
        let incoming = vec![vec![1], vec![0, 2], vec![1]];
        GraphView::from_adjacency_list(3, outgoing, incoming, None)
    }

    #[test]
    fn test_path_midpoint() {
        let view = path_graph_view();
        let scores = betweenness_centrality(&view);

        // The middle node lies on the single shortest path between the
        // endpoints; the endpoints lie on none.
        assert_eq!(scores[0], 0.0);
        assert_eq!(scores[2], 0.0);
        assert!((scores[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_too_small_graph() {
        let view = GraphView::from_adjacency_list(2, vec![vec![1], vec![]], vec![vec![], vec![0]], None);
        assert_eq!(betweenness_centrality(&view), vec![0.0, 0.0]);
    }

    #[test]
    fn test_isolated_node_scores_zero() {
        // 0 <-> 1 <-> 2 plus isolated 3
        let outgoing = vec![vec![1], vec![0, 2], vec![1], vec![]];
        let incoming = vec![vec![1], vec![0, 2], vec![1], vec![]];
        let view = GraphView::from_adjacency_list(4, outgoing, incoming, None);

        let scores = betweenness_centrality(&view);
        assert_eq!(scores[3], 0.0);
        assert!(scores[1] > 0.0);
    }
}
