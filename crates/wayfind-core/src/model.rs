//! Core data structures for the weighted graph

use serde::{Deserialize, Serialize};

/// Weight of a single edge. Zero cells in the matrix mean "no edge".
pub type Weight = u32;

/// Accumulated cost of a path.
pub type Distance = u64;

/// Position of a node in the label list it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named vertex.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphNode {
    pub id: NodeId,
    pub label: String,
}

/// A directed, weighted arc. Owned by the graph, reported by its source node.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: Weight,
}

/// One row of the adjacency dump: a node and its outgoing `(destination, weight)` pairs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdjacencyRow {
    pub label: String,
    pub edges: Vec<(String, Weight)>,
}
