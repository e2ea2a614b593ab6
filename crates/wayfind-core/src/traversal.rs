//! Depth-first and breadth-first traversal over the edge-list order

use crate::error::Result;
use crate::graph::Graph;
use crate::model::NodeId;
use crate::visit::VisitedSet;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraversalKind {
    DepthFirst,
    BreadthFirst,
}

impl TraversalKind {
    pub fn name(self) -> &'static str {
        match self {
            TraversalKind::DepthFirst => "DFS",
            TraversalKind::BreadthFirst => "BFS",
        }
    }

    /// What holds the not-yet-processed nodes.
    pub fn frontier(self) -> &'static str {
        match self {
            TraversalKind::DepthFirst => "Stack",
            TraversalKind::BreadthFirst => "Queue",
        }
    }
}

/// Outcome of one traversal run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traversal {
    pub kind: TraversalKind,
    pub start: String,
    /// Labels in the order they were emitted. Each label appears at most once.
    pub order: Vec<String>,
    /// Every node marked when the run ended, in graph order. With a carried-over
    /// [`VisitedSet`] this includes nodes marked by earlier runs.
    pub visited: Vec<String>,
}

/// Working set of nodes still to be processed.
trait Frontier: Extend<NodeId> {
    fn pop_next(&mut self) -> Option<NodeId>;
}

/// Last in, first out.
impl Frontier for Vec<NodeId> {
    fn pop_next(&mut self) -> Option<NodeId> {
        self.pop()
    }
}

/// First in, first out.
impl Frontier for VecDeque<NodeId> {
    fn pop_next(&mut self) -> Option<NodeId> {
        self.pop_front()
    }
}

/// Depth-first search from `start` with a fresh visited set.
pub fn dfs(graph: &Graph, start: &str) -> Result<Traversal> {
    let mut visited = VisitedSet::new(graph);
    dfs_continue(graph, start, &mut visited)
}

/// Depth-first search that keeps the marks already in `visited`.
pub fn dfs_continue(graph: &Graph, start: &str, visited: &mut VisitedSet) -> Result<Traversal> {
    walk(graph, start, visited, TraversalKind::DepthFirst, Vec::new())
}

/// Breadth-first search from `start` with a fresh visited set.
pub fn bfs(graph: &Graph, start: &str) -> Result<Traversal> {
    let mut visited = VisitedSet::new(graph);
    bfs_continue(graph, start, &mut visited)
}

/// Breadth-first search that keeps the marks already in `visited`.
pub fn bfs_continue(graph: &Graph, start: &str, visited: &mut VisitedSet) -> Result<Traversal> {
    walk(graph, start, visited, TraversalKind::BreadthFirst, VecDeque::new())
}

/// Shared loop for both traversals.
///
/// DFS marks and emits the start node up front. BFS queues the start unmarked,
/// so a continued BFS from an already-marked start emits nothing. Every other
/// node is marked when it is taken from the frontier, not when it is added, so
/// it may sit in the frontier several times; later copies are dropped without
/// being emitted.
fn walk<F: Frontier>(
    graph: &Graph,
    start: &str,
    visited: &mut VisitedSet,
    kind: TraversalKind,
    mut frontier: F,
) -> Result<Traversal> {
    let start_id = graph.find_start(start)?;
    visited.fit(graph);
    tracing::debug!(kind = kind.name(), start, "Starting traversal");

    let mut order = Vec::new();
    match kind {
        TraversalKind::DepthFirst => {
            visited.mark(start_id);
            order.push(start_id);
            frontier.extend(unvisited_neighbors(graph, start_id, visited));
        }
        TraversalKind::BreadthFirst => frontier.extend([start_id]),
    }

    while let Some(current) = frontier.pop_next() {
        if !visited.mark(current) {
            continue;
        }
        tracing::trace!(kind = kind.name(), node = current.index(), "Visit");
        order.push(current);
        frontier.extend(unvisited_neighbors(graph, current, visited));
    }

    Ok(Traversal {
        kind,
        start: start.to_string(),
        order: order
            .into_iter()
            .filter_map(|id| graph.label(id).map(str::to_string))
            .collect(),
        visited: visited.labels_in_graph_order(graph),
    })
}

fn unvisited_neighbors<'a>(
    graph: &'a Graph,
    node: NodeId,
    visited: &'a VisitedSet,
) -> impl Iterator<Item = NodeId> + 'a {
    graph
        .edges_from(node)
        .map(|e| e.target)
        .filter(move |&target| !visited.is_visited(target))
}
