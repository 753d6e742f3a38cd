//! In-memory weighted graph storage
//!
//! A `TagGraph` is populated by a single builder pass and treated as
//! immutable by every downstream consumer; rebuilding means
//! constructing a new instance. Node identifiers are opaque strings
//! interned to dense indices in first-insertion order, which makes
//! iteration, ranking tie-breaks and export deterministic.

use super::types::{NodeIndex, Orientation};
use indexmap::{IndexMap, IndexSet};
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("cannot merge a {found} partial into a {expected} graph")]
    OrientationMismatch {
        expected: Orientation,
        found: Orientation,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Weighted graph over opaque string node identifiers.
///
/// Undirected graphs store one canonical entry per unordered pair: the
/// lexicographically smaller identifier comes first. Canonicalization
/// happens at insert time, so merging independently built partials
/// commutes with it. Nodes exist only as edge endpoints; there are no
/// implicit isolated nodes, and no edge is ever stored with weight 0.
#[derive(Debug, Clone, PartialEq)]
pub struct TagGraph {
    orientation: Orientation,
    /// Node identifiers in first-insertion order
    nodes: IndexSet<String>,
    /// `(source, target)` index pair -> weight, in first-insertion order
    edges: IndexMap<(NodeIndex, NodeIndex), u64>,
}

impl TagGraph {
    /// Create a new empty graph
    pub fn new(orientation: Orientation) -> Self {
        TagGraph {
            orientation,
            nodes: IndexSet::new(),
            edges: IndexMap::new(),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add `weight` to the edge between `source` and `target`,
    /// interning endpoints as needed. Undirected pairs are
    /// canonicalized first. A zero weight is a no-op.
    pub fn add_edge(&mut self, source: &str, target: &str, weight: u64) {
        if weight == 0 {
            return;
        }

        let (a, b) = match self.orientation {
            Orientation::Directed => (source, target),
            Orientation::Undirected => {
                if source <= target {
                    (source, target)
                } else {
                    (target, source)
                }
            }
        };

        let a_idx = self.intern(a);
        let b_idx = self.intern(b);
        *self.edges.entry((a_idx, b_idx)).or_insert(0) += weight;
    }

    fn intern(&mut self, id: &str) -> NodeIndex {
        if let Some(idx) = self.nodes.get_index_of(id) {
            NodeIndex::new(idx as u32)
        } else {
            let (idx, _) = self.nodes.insert_full(id.to_string());
            NodeIndex::new(idx as u32)
        }
    }

    /// Dense index of a node identifier, if present
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.nodes.get_index_of(id).map(|i| NodeIndex::new(i as u32))
    }

    /// Node identifier at a dense index
    pub fn node(&self, idx: NodeIndex) -> Option<&str> {
        self.nodes.get_index(idx.as_usize()).map(|s| s.as_str())
    }

    /// Node identifiers in first-insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|s| s.as_str())
    }

    /// Edges as `(source, target, weight)` index triples in
    /// first-insertion order
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, u64)> + '_ {
        self.edges.iter().map(|(&(a, b), &w)| (a, b, w))
    }

    /// Weight of the edge between two identifiers, if present.
    /// Undirected lookups accept either endpoint order.
    pub fn edge_weight(&self, source: &str, target: &str) -> Option<u64> {
        let (a, b) = match self.orientation {
            Orientation::Directed => (source, target),
            Orientation::Undirected => {
                if source <= target {
                    (source, target)
                } else {
                    (target, source)
                }
            }
        };
        let a_idx = self.node_index(a)?;
        let b_idx = self.node_index(b)?;
        self.edges.get(&(a_idx, b_idx)).copied()
    }

    /// Total incident edge count per node, indexed densely.
    ///
    /// Directed graphs count in-degree plus out-degree, so a self-loop
    /// contributes 2; undirected pairs contribute 1 to each endpoint.
    pub fn degrees(&self) -> Vec<u64> {
        let mut degrees = vec![0u64; self.nodes.len()];
        for &(a, b) in self.edges.keys() {
            degrees[a.as_usize()] += 1;
            degrees[b.as_usize()] += 1;
        }
        degrees
    }

    /// Fold another partial graph of the same orientation into this
    /// one, summing edge weights.
    pub fn merge_from(&mut self, other: &TagGraph) -> GraphResult<()> {
        if other.orientation != self.orientation {
            return Err(GraphError::OrientationMismatch {
                expected: self.orientation,
                found: other.orientation,
            });
        }
        for (a, b, w) in other.edges() {
            // Endpoints are already canonical for this orientation
            let source = other.node(a).expect("endpoint is interned");
            let target = other.node(b).expect("endpoint is interned");
            self.add_edge(source, target, w);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undirected_canonical_pair() {
        let mut graph = TagGraph::new(Orientation::Undirected);
        graph.add_edge("b", "a", 1);
        graph.add_edge("a", "b", 2);

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight("a", "b"), Some(3));
        assert_eq!(graph.edge_weight("b", "a"), Some(3));
    }

    #[test]
    fn test_directed_orders_are_distinct() {
        let mut graph = TagGraph::new(Orientation::Directed);
        graph.add_edge("a", "b", 1);
        graph.add_edge("b", "a", 1);

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_weight("a", "b"), Some(1));
        assert_eq!(graph.edge_weight("b", "a"), Some(1));
    }

    #[test]
    fn test_zero_weight_is_never_stored() {
        let mut graph = TagGraph::new(Orientation::Directed);
        graph.add_edge("a", "b", 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_nodes_in_insertion_order() {
        let mut graph = TagGraph::new(Orientation::Directed);
        graph.add_edge("z", "m", 1);
        graph.add_edge("a", "z", 1);

        let nodes: Vec<&str> = graph.nodes().collect();
        assert_eq!(nodes, vec!["z", "m", "a"]);
    }

    #[test]
    fn test_degrees() {
        let mut graph = TagGraph::new(Orientation::Directed);
        graph.add_edge("a", "b", 5);
        graph.add_edge("b", "a", 1);
        graph.add_edge("a", "a", 1);

        // a: out a->b, in b->a, self-loop twice = 4
        let degrees = graph.degrees();
        let a = graph.node_index("a").unwrap().as_usize();
        let b = graph.node_index("b").unwrap().as_usize();
        assert_eq!(degrees[a], 4);
        assert_eq!(degrees[b], 2);
    }

    #[test]
    fn test_merge_sums_weights() {
        let mut left = TagGraph::new(Orientation::Undirected);
        left.add_edge("a", "b", 1);

        let mut right = TagGraph::new(Orientation::Undirected);
        right.add_edge("b", "a", 2);
        right.add_edge("b", "c", 1);

        left.merge_from(&right).unwrap();
        assert_eq!(left.edge_weight("a", "b"), Some(3));
        assert_eq!(left.edge_weight("c", "b"), Some(1));
    }

    #[test]
    fn test_merge_orientation_mismatch() {
        let mut left = TagGraph::new(Orientation::Undirected);
        let right = TagGraph::new(Orientation::Directed);

        let err = left.merge_from(&right).unwrap_err();
        assert_eq!(
            err,
            GraphError::OrientationMismatch {
                expected: Orientation::Undirected,
                found: Orientation::Directed,
            }
        );
    }
}
