//! Wayfind Core — weighted directed graph built from an adjacency matrix,
//! with DFS, BFS and Dijkstra shortest paths

pub mod error;
pub mod graph;
pub mod model;
pub mod report;
pub mod shortest_path;
pub mod traversal;
pub mod visit;


#[cfg(test)]
pub mod test_utils;

pub use error::{Axis, GraphError, Result};
pub use graph::Graph;
pub use model::{AdjacencyRow, Distance, GraphEdge, GraphNode, NodeId, Weight};
pub use report::{render_adjacency, render_route, render_shortest_paths, render_traversal};
pub use shortest_path::{Reachability, Route, ShortestPaths, shortest_paths};
pub use traversal::{Traversal, TraversalKind, bfs, bfs_continue, dfs, dfs_continue};
pub use visit::VisitedSet;
