//! Test fixtures for wayfind-core

use crate::graph::Graph;
use crate::model::{Distance, NodeId, Weight};

pub const REFERENCE_LABELS: [&str; 9] = ["A", "B", "C", "D", "E", "F", "G", "H", "I"];

/// The nine-node undirected-looking weighted graph used throughout the tests.
pub fn reference_matrix() -> Vec<Vec<Weight>> {
    vec![
        vec![0, 2, 1, 7, 0, 0, 0, 0, 0],
        vec![2, 0, 5, 5, 0, 0, 0, 0, 0],
        vec![1, 5, 0, 4, 0, 9, 0, 0, 0],
        vec![7, 5, 4, 0, 8, 0, 0, 0, 0],
        vec![0, 0, 0, 8, 0, 3, 7, 0, 0],
        vec![0, 0, 9, 0, 3, 0, 5, 10, 0],
        vec![0, 0, 0, 0, 7, 5, 0, 11, 6],
        vec![0, 0, 0, 0, 0, 10, 11, 0, 3],
        vec![0, 0, 0, 0, 0, 0, 6, 3, 0],
    ]
}

pub fn reference_graph() -> Graph {
    Graph::from_matrix(&reference_matrix(), &REFERENCE_LABELS).unwrap()
}

/// Build a graph with labels `A`, `B`, ... for the given matrix.
pub fn lettered_graph(matrix: &[Vec<Weight>]) -> Graph {
    let labels: Vec<String> = (0..matrix.len())
        .map(|i| char::from(b'A' + i as u8).to_string())
        .collect();
    Graph::from_matrix(matrix, &labels).unwrap()
}

/// Cheapest cost from `start` to every node by enumerating all simple paths.
pub fn brute_force_distances(graph: &Graph, start: NodeId) -> Vec<Option<Distance>> {
    let mut best = vec![None; graph.node_count()];
    let mut on_path = vec![false; graph.node_count()];
    explore(graph, start, 0, &mut on_path, &mut best);
    best
}

fn explore(
    graph: &Graph,
    node: NodeId,
    cost: Distance,
    on_path: &mut [bool],
    best: &mut [Option<Distance>],
) {
    let slot = &mut best[node.index()];
    if slot.is_none_or(|b| cost < b) {
        *slot = Some(cost);
    }
    on_path[node.index()] = true;
    let edges: Vec<_> = graph.edges_from(node).copied().collect();
    for edge in edges {
        if !on_path[edge.target.index()] {
            explore(graph, edge.target, cost + Distance::from(edge.weight), on_path, best);
        }
    }
    on_path[node.index()] = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lettered_graph_labels() {
        let graph = lettered_graph(&[vec![0, 1], vec![0, 0]]);
        assert_eq!(graph.labels().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_brute_force_on_triangle() {
        // A -> B (5), A -> C (1), C -> B (1)
        let graph = lettered_graph(&[vec![0, 5, 1], vec![0, 0, 0], vec![0, 1, 0]]);
        let best = brute_force_distances(&graph, NodeId(0));
        assert_eq!(best, vec![Some(0), Some(2), Some(1)]);
    }
}
