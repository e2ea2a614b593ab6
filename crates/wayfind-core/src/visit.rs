//! Visited flags for traversals, owned by the caller instead of the nodes

use crate::graph::Graph;
use crate::model::NodeId;

/// One flag per node of a specific graph.
///
/// A set belongs to one graph. Handing it to a traversal over a graph with a
/// different node count clears it first.
///
/// Fresh traversals allocate their own set. Passing the same set to several
/// `*_continue` runs without calling [`VisitedSet::reset`] carries the marks
/// over, so later runs skip whatever earlier runs already reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedSet {
    marks: Vec<bool>,
}

impl VisitedSet {
    pub fn new(graph: &Graph) -> Self {
        VisitedSet {
            marks: vec![false; graph.node_count()],
        }
    }

    /// Start over with all flags clear if `graph` has a different node count.
    pub(crate) fn fit(&mut self, graph: &Graph) {
        if self.marks.len() != graph.node_count() {
            tracing::debug!(
                had = self.marks.len(),
                nodes = graph.node_count(),
                "Visited set sized for another graph, clearing"
            );
            self.marks = vec![false; graph.node_count()];
        }
    }

    /// Clear every flag.
    pub fn reset(&mut self) {
        self.marks.fill(false);
    }

    /// Mark a node. Returns `true` if it was not marked before.
    pub fn mark(&mut self, id: NodeId) -> bool {
        match self.marks.get_mut(id.index()) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_visited(&self, id: NodeId) -> bool {
        self.marks.get(id.index()).copied().unwrap_or(false)
    }

    pub fn visited_count(&self) -> usize {
        self.marks.iter().filter(|&&m| m).count()
    }

    /// Labels of the marked nodes, in graph order rather than visit order.
    pub fn labels_in_graph_order(&self, graph: &Graph) -> Vec<String> {
        graph
            .nodes()
            .filter(|n| self.is_visited(n.id))
            .map(|n| n.label.clone())
            .collect()
    }
}
