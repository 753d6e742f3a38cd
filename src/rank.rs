//! Deterministic top-N ranking
//!
//! A stable descending sort over insertion-ordered scores: ties keep
//! the order nodes were first inserted into the graph, so two ranking
//! calls over an unmodified graph return the identical sequence.

use crate::algo::CentralityScores;

/// Top `n` entries of a score sequence, descending by score, ties
/// broken by position in the input (first-insertion order when the
/// input comes from [`centrality`](crate::algo::centrality)).
///
/// `n == 0` returns an empty vec; `n` beyond the node count returns
/// every node. Pure and side-effect-free.
pub fn top_n(scores: &[(String, f64)], n: usize) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = scores.to_vec();
    // Stable sort preserves input order among equal scores
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(n);
    ranked
}

/// Convenience for ranking straight from a centrality result.
pub fn top_n_by_centrality(scores: &CentralityScores, n: usize) -> Vec<(String, f64)> {
    top_n(&scores.scores, n)
}
