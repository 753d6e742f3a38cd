//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense-indexed view of a graph topology for
//! algorithm execution. Callers intern their node identifiers to the
//! indices `0..node_count` before building the view; undirected graphs
//! are presented symmetrically (both directions materialized).

/// A dense, integer-indexed view of a graph topology using Compressed
/// Sparse Row (CSR) format.
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,

    /// Outgoing edges CSR structure.
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<usize>,

    /// Incoming edges CSR structure (Compressed Sparse Column effectively).
    /// Offsets into `in_sources`. Size = node_count + 1
    pub in_offsets: Vec<usize>,
    /// Contiguous array of source node indices
    pub in_sources: Vec<usize>,

    /// Edge weights: aligned with `out_targets`
    pub weights: Option<Vec<f64>>,
}

impl GraphView {
    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get the in-degree of a node (by index)
    pub fn in_degree(&self, idx: usize) -> usize {
        self.in_offsets[idx + 1] - self.in_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: usize) -> &[usize] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Get incoming neighbors (predecessors) of a node
    pub fn predecessors(&self, idx: usize) -> &[usize] {
        let start = self.in_offsets[idx];
        let end = self.in_offsets[idx + 1];
        &self.in_sources[start..end]
    }

    /// Get weights for outgoing edges of a node
    pub fn edge_weights(&self, idx: usize) -> Option<&[f64]> {
        self.weights.as_ref().map(|w| {
            let start = self.out_offsets[idx];
            let end = self.out_offsets[idx + 1];
            &w[start..end]
        })
    }

    /// Total number of stored (directed) edge entries
    pub fn edge_entry_count(&self) -> usize {
        self.out_targets.len()
    }

    /// Build a GraphView from per-node adjacency lists.
    ///
    /// `weights`, when present, must be aligned row-for-row with `outgoing`.
    pub fn from_adjacency_list(
        node_count: usize,
        outgoing: Vec<Vec<usize>>,
        incoming: Vec<Vec<usize>>,
        weights: Option<Vec<Vec<f64>>>,
    ) -> Self {
        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();
        let mut in_offsets = Vec::with_capacity(node_count + 1);
        let mut in_sources = Vec::new();

        let mut weight_rows = weights.map(|w| w.into_iter());
        let mut flat_weights = weight_rows.as_ref().map(|_| Vec::new());

        out_offsets.push(0);
        for neighbors in outgoing {
            out_targets.extend(neighbors);
            out_offsets.push(out_targets.len());

            if let (Some(rows), Some(flat)) = (weight_rows.as_mut(), flat_weights.as_mut()) {
                if let Some(row) = rows.next() {
                    flat.extend(row);
                }
            }
        }

        in_offsets.push(0);
        for sources in incoming {
            in_sources.extend(sources);
            in_offsets.push(in_sources.len());
        }

        GraphView {
            node_count,
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
            weights: flat_weights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csr_construction() {
        // 0 -> 1, 0 -> 2, 1 -> 2
        let outgoing = vec![vec![1, 2], vec![2], vec![]];
        let incoming = vec![vec![], vec![0], vec![0, 1]];
        let weights = Some(vec![vec![1.0, 2.0], vec![3.0], vec![]]);

        let view = GraphView::from_adjacency_list(3, outgoing, incoming, weights);

        assert_eq!(view.out_degree(0), 2);
        assert_eq!(view.out_degree(2), 0);
        assert_eq!(view.in_degree(2), 2);
        assert_eq!(view.successors(0), &[1, 2]);
        assert_eq!(view.predecessors(2), &[0, 1]);
        assert_eq!(view.edge_weights(0), Some(&[1.0, 2.0][..]));
        assert_eq!(view.edge_weights(1), Some(&[3.0][..]));
        assert_eq!(view.edge_entry_count(), 3);
    }
}
