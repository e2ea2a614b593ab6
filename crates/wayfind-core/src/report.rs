//! Plain-text rendering of graphs and algorithm results

use crate::model::AdjacencyRow;
use crate::shortest_path::{Reachability, Route, ShortestPaths};
use crate::traversal::Traversal;

/// One line per node: `A (D, 7) (C, 1) (B, 2)`.
pub fn render_adjacency(rows: &[AdjacencyRow]) -> String {
    rows.iter()
        .map(|row| {
            std::iter::once(row.label.clone())
                .chain(row.edges.iter().map(|(to, w)| format!("({}, {})", to, w)))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Emission order on the first line, graph-order visited set on the second.
pub fn render_traversal(run: &Traversal) -> String {
    format!(
        "{} (using {}) from {}: {}\nVisited nodes: {}",
        run.kind.name(),
        run.kind.frontier(),
        run.start,
        run.order.join(" "),
        run.visited.join(" "),
    )
}

/// `B: 2 via A -> B`, or `B: unreachable` when no path exists.
pub fn render_route(route: &Route) -> String {
    match &route.outcome {
        Reachability::Reachable { distance, path } => {
            format!("{}: {} via {}", route.destination, distance, path.join(" -> "))
        }
        Reachability::Unreachable => format!("{}: unreachable", route.destination),
    }
}

pub fn render_shortest_paths(result: &ShortestPaths) -> String {
    std::iter::once(format!("Shortest paths from {}:", result.start))
        .chain(result.routes.iter().map(|r| format!("  {}", render_route(r))))
        .collect::<Vec<_>>()
        .join("\n")
}
