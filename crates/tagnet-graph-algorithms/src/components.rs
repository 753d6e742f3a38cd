//! Connected components
//!
//! Union-find over the edge list, ignoring edge direction, which gives
//! weak connectivity for directed views and plain connectivity for
//! symmetric (undirected) ones.

use super::common::GraphView;

/// Result of the components computation
pub struct ComponentsResult {
    /// Component label for each node index (labels are root indices)
    pub component_of: Vec<usize>,
    /// Number of distinct components
    pub component_count: usize,
}

/// Union-Find data structure
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            self.parent[i] = self.find(self.parent[i]); // Path compression
        }
        self.parent[i]
    }

    fn union(&mut self, i: usize, j: usize) {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i != root_j {
            if self.rank[root_i] < self.rank[root_j] {
                self.parent[root_i] = root_j;
            } else if self.rank[root_i] > self.rank[root_j] {
                self.parent[root_j] = root_i;
            } else {
                self.parent[root_j] = root_i;
                self.rank[root_i] += 1;
            }
        }
    }
}

/// Weakly connected components over the view's edge set.
pub fn connected_components(view: &GraphView) -> ComponentsResult {
    let n = view.node_count;
    let mut uf = UnionFind::new(n);

    for u in 0..n {
        for &v in view.successors(u) {
            uf.union(u, v);
        }
    }

    let mut component_of = Vec::with_capacity(n);
    let mut component_count = 0;
    for i in 0..n {
        let root = uf.find(i);
        if root == i {
            component_count += 1;
        }
        component_of.push(root);
    }

    ComponentsResult {
        component_of,
        component_count,
    }
}

/// Whether every node is reachable from every other when direction is
/// ignored. The empty view is not considered connected.
pub fn is_connected(view: &GraphView) -> bool {
    view.node_count > 0 && connected_components(view).component_count == 1
}
