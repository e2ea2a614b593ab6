//! CLI command implementations

use crate::Format;
use serde::Serialize;
use wayfind_core::{
    Graph, VisitedSet, render_adjacency, render_route, render_shortest_paths, render_traversal,
};

/// Print `value` as pretty JSON, or as the given text rendering.
fn emit<T: Serialize>(
    value: &T,
    format: Format,
    text: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    match format {
        Format::Text => println!("{}", text(value)),
        Format::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

pub fn dump(graph: &Graph, format: Format) -> anyhow::Result<()> {
    tracing::info!("Graph has {} nodes, {} edges", graph.node_count(), graph.edge_count());
    emit(&graph.adjacency(), format, |rows| render_adjacency(rows))
}

pub fn dfs(graph: &Graph, start: &str, format: Format) -> anyhow::Result<()> {
    let run = wayfind_core::dfs(graph, start)?;
    emit(&run, format, render_traversal)
}

pub fn bfs(graph: &Graph, start: &str, format: Format) -> anyhow::Result<()> {
    let run = wayfind_core::bfs(graph, start)?;
    emit(&run, format, render_traversal)
}

pub fn shortest(
    graph: &Graph,
    start: &str,
    to: Option<&str>,
    format: Format,
) -> anyhow::Result<()> {
    let result = wayfind_core::shortest_paths(graph, start)?;
    match to {
        None => emit(&result, format, render_shortest_paths),
        Some(destination) => {
            graph.find_node(destination)?;
            let route = result
                .route_to(destination)
                .ok_or_else(|| anyhow::anyhow!("no route entry for {}", destination))?;
            emit(route, format, render_route)
        }
    }
}

/// Dump, DFS from A then E sharing one visited set, BFS from A and H on a
/// reset set, then shortest paths from A and from E.
pub fn demo(graph: &Graph, format: Format) -> anyhow::Result<()> {
    let mut visited = VisitedSet::new(graph);
    let dfs_runs = vec![
        wayfind_core::dfs_continue(graph, "A", &mut visited)?,
        wayfind_core::dfs_continue(graph, "E", &mut visited)?,
    ];

    visited.reset();
    let bfs_a = wayfind_core::bfs_continue(graph, "A", &mut visited)?;
    visited.reset();
    let bfs_h = wayfind_core::bfs_continue(graph, "H", &mut visited)?;
    let bfs_runs = vec![bfs_a, bfs_h];

    let shortest = vec![
        wayfind_core::shortest_paths(graph, "A")?,
        wayfind_core::shortest_paths(graph, "E")?,
    ];
    tracing::info!(
        "Demo finished: {} traversals, {} searches",
        dfs_runs.len() + bfs_runs.len(),
        shortest.len()
    );

    match format {
        Format::Text => {
            let sections = std::iter::once(render_adjacency(&graph.adjacency()))
                .chain(dfs_runs.iter().chain(&bfs_runs).map(render_traversal))
                .chain(shortest.iter().map(render_shortest_paths))
                .collect::<Vec<_>>();
            println!("{}", sections.join("\n\n"));
        }
        Format::Json => {
            let report = serde_json::json!({
                "adjacency": graph.adjacency(),
                "dfs": dfs_runs,
                "bfs": bfs_runs,
                "shortest_paths": shortest,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
