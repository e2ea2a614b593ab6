//! Single-source shortest paths (Dijkstra) over non-negative edge weights

use crate::error::Result;
use crate::graph::Graph;
use crate::model::{Distance, NodeId};
use serde::{Deserialize, Serialize};

/// Whether a destination can be reached from the start node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Reachability {
    /// `path` runs from the start to the destination, both inclusive.
    Reachable { distance: Distance, path: Vec<String> },
    Unreachable,
}

/// Result for one destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub destination: String,
    pub outcome: Reachability,
}

impl Route {
    pub fn distance(&self) -> Option<Distance> {
        match &self.outcome {
            Reachability::Reachable { distance, .. } => Some(*distance),
            Reachability::Unreachable => None,
        }
    }

    pub fn path(&self) -> Option<&[String]> {
        match &self.outcome {
            Reachability::Reachable { path, .. } => Some(path.as_slice()),
            Reachability::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self.outcome, Reachability::Reachable { .. })
    }
}

/// Shortest routes from one start node to every node of the graph, in graph order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPaths {
    pub start: String,
    pub routes: Vec<Route>,
}

impl ShortestPaths {
    /// Route to a single destination, if the label exists.
    pub fn route_to(&self, destination: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.destination == destination)
    }

    pub fn reachable(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().filter(|r| r.is_reachable())
    }
}

/// Run Dijkstra from `start` and report every node of the graph.
///
/// Selection is a linear scan over unvisited nodes; among equal tentative
/// distances the lowest node index wins. Relaxation is strict, so the first
/// predecessor to reach a distance keeps it. At most `node_count - 1` nodes
/// are settled, and the loop stops early once no unvisited node has a finite
/// distance. Negative weights cannot be expressed (`Weight` is unsigned).
pub fn shortest_paths(graph: &Graph, start: &str) -> Result<ShortestPaths> {
    let start_id = graph.find_start(start)?;
    let n = graph.node_count();

    let mut distance: Vec<Option<Distance>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut previous: Vec<Option<NodeId>> = vec![None; n];
    distance[start_id.index()] = Some(0);

    for _ in 1..n {
        let Some(current) = closest_unsettled(&distance, &settled) else {
            tracing::trace!("No reachable node left to settle");
            break;
        };
        settled[current.index()] = true;
        let Some(base) = distance[current.index()] else {
            break;
        };

        for edge in graph.edges_from(current) {
            let target = edge.target.index();
            let candidate = base + Distance::from(edge.weight);
            if distance[target].is_none_or(|d| candidate < d) {
                tracing::trace!(from = current.index(), to = target, candidate, "Relax");
                distance[target] = Some(candidate);
                previous[target] = Some(current);
            }
        }
    }

    let routes = graph
        .nodes()
        .map(|node| Route {
            destination: node.label.clone(),
            outcome: match distance[node.id.index()] {
                Some(d) => Reachability::Reachable {
                    distance: d,
                    path: trace_back(graph, &previous, node.id),
                },
                None => Reachability::Unreachable,
            },
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        start,
        reachable = routes.iter().filter(|r| r.is_reachable()).count(),
        total = n,
        "Shortest paths computed"
    );

    Ok(ShortestPaths {
        start: start.to_string(),
        routes,
    })
}

/// Unsettled node with the smallest finite distance, lowest index on ties.
fn closest_unsettled(distance: &[Option<Distance>], settled: &[bool]) -> Option<NodeId> {
    distance
        .iter()
        .zip(settled)
        .enumerate()
        .filter(|&(_, (_, done))| !*done)
        .filter_map(|(i, (d, _))| d.map(|d| (d, i)))
        .min()
        .map(|(_, i)| NodeId(i))
}

/// Walk predecessors back from `destination` and return the labels start-first.
fn trace_back(graph: &Graph, previous: &[Option<NodeId>], destination: NodeId) -> Vec<String> {
    let mut path = Vec::new();
    let mut cursor = Some(destination);
    while let Some(id) = cursor {
        if let Some(label) = graph.label(id) {
            path.push(label.to_string());
        }
        cursor = previous.get(id.index()).copied().flatten();
    }
    path.reverse();
    path
}
