//! Graph wrapper over petgraph::DiGraph, built once from a weight matrix

use crate::error::{Axis, GraphError, Result};
use crate::model::*;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

/// A directed, weighted graph. Immutable after construction.
///
/// Node `i` is `labels[i]`. Outgoing edges are reported newest-first: for a
/// row `[0, 2, 1]` the edge list of node 0 is `(2, 1), (1, 2)`. Every
/// traversal and the adjacency dump follow this order.
pub struct Graph {
    inner: DiGraph<GraphNode, GraphEdge>,
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("node_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .finish()
    }
}

impl Graph {
    /// Build a graph from a square weight matrix and a parallel label list.
    ///
    /// Every non-zero cell `matrix[i][j]` becomes an edge `i -> j`. Fails with
    /// [`GraphError::DimensionMismatch`] when the row count or any row length
    /// differs from `labels.len()`.
    pub fn from_matrix<R, L>(matrix: &[R], labels: &[L]) -> Result<Self>
    where
        R: AsRef<[Weight]>,
        L: AsRef<str>,
    {
        let n = labels.len();
        if matrix.len() != n {
            return Err(GraphError::DimensionMismatch {
                axis: Axis::Rows,
                expected: n,
                found: matrix.len(),
            });
        }
        for (row, cells) in matrix.iter().enumerate() {
            let cells: &[Weight] = cells.as_ref();
            if cells.len() != n {
                return Err(GraphError::DimensionMismatch {
                    axis: Axis::Row(row),
                    expected: n,
                    found: cells.len(),
                });
            }
        }

        let mut inner = DiGraph::with_capacity(n, 0);
        for (i, label) in labels.iter().enumerate() {
            inner.add_node(GraphNode {
                id: NodeId(i),
                label: label.as_ref().to_string(),
            });
        }

        for (i, cells) in matrix.iter().enumerate() {
            let cells: &[Weight] = cells.as_ref();
            for (j, &weight) in cells.iter().enumerate() {
                if weight == 0 {
                    continue;
                }
                let edge = GraphEdge {
                    source: NodeId(i),
                    target: NodeId(j),
                    weight,
                };
                inner.add_edge(NodeIndex::new(i), NodeIndex::new(j), edge);
            }
        }

        tracing::debug!(
            nodes = inner.node_count(),
            edges = inner.edge_count(),
            "Graph built from matrix"
        );
        Ok(Graph { inner })
    }

    /// Get a node by ID.
    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.inner.node_weight(NodeIndex::new(id.0))
    }

    /// Label of a node, if the ID belongs to this graph.
    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.label.as_str())
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Iterate over all nodes in label-list order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.inner
            .node_indices()
            .filter_map(move |idx| self.inner.node_weight(idx))
    }

    /// Labels in graph order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.nodes().map(|n| n.label.as_str())
    }

    /// Outgoing edges of a node, newest-first.
    pub fn edges_from(&self, source: NodeId) -> impl Iterator<Item = &GraphEdge> {
        let idx = NodeIndex::new(source.0);
        self.inner
            .edges(idx)
            .filter_map(move |edge_ref| self.inner.edge_weight(edge_ref.id()))
    }

    /// Find a node by label (first match).
    pub fn find_node(&self, label: &str) -> Result<NodeId> {
        self.nodes()
            .find(|n| n.label == label)
            .map(|n| n.id)
            .ok_or_else(|| GraphError::NodeNotFound(label.to_string()))
    }

    /// Like [`Graph::find_node`], but reports the miss as a bad start label.
    pub(crate) fn find_start(&self, label: &str) -> Result<NodeId> {
        self.find_node(label)
            .map_err(|_| GraphError::StartNotFound(label.to_string()))
    }

    /// The whole graph as `(label, [(destination, weight)])` rows, in graph order.
    pub fn adjacency(&self) -> Vec<AdjacencyRow> {
        self.nodes()
            .map(|node| AdjacencyRow {
                label: node.label.clone(),
                edges: self
                    .edges_from(node.id)
                    .filter_map(|e| {
                        self.label(e.target)
                            .map(|target| (target.to_string(), e.weight))
                    })
                    .collect(),
            })
            .collect()
    }
}
