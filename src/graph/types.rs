//! Core type definitions for the graph model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense index of a node within one graph, assigned in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub fn new(idx: u32) -> Self {
        NodeIndex(idx)
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeIndex({})", self.0)
    }
}

impl From<u32> for NodeIndex {
    fn from(idx: u32) -> Self {
        NodeIndex(idx)
    }
}

/// Edge orientation of a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// `(a, b)` and `(b, a)` are distinct edges
    Directed,
    /// One canonical entry per unordered pair
    Undirected,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Directed => write!(f, "directed"),
            Orientation::Undirected => write!(f, "undirected"),
        }
    }
}
