//! Integration tests for Wayfind
//!
//! These tests run the compiled binary against the built-in graph.

use std::process::{Command, Output};

fn wayfind(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wayfind"))
        .args(args)
        .output()
        .expect("Failed to execute wayfind")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Test that the CLI can be invoked
#[test]
fn test_cli_help() {
    let output = wayfind(&["--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Dijkstra"));
}

#[test]
fn test_dump_lists_every_node() {
    let output = wayfind(&["dump"]);
    assert!(output.status.success());
    let text = stdout(&output);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "A (D, 7) (C, 1) (B, 2)");
    assert_eq!(lines[8], "I (H, 3) (G, 6)");
}

#[test]
fn test_dfs_and_bfs_output() {
    let output = wayfind(&["dfs", "--start", "E"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        "DFS (using Stack) from E: E D A B C F G H I\nVisited nodes: A B C D E F G H I"
    );

    let output = wayfind(&["bfs", "--start", "H"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("BFS (using Queue) from H: H I G F E C D B A\n"));
}

#[test]
fn test_shortest_route_to_single_destination() {
    let output = wayfind(&["shortest", "--start", "A", "--to", "I"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "I: 21 via A -> C -> F -> G -> I");
}

#[test]
fn test_shortest_json_output() {
    let output = wayfind(&["--format", "json", "shortest", "--start", "E"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["start"], "E");
    assert_eq!(value["routes"].as_array().unwrap().len(), 9);
    assert_eq!(value["routes"][6]["destination"], "G");
    assert_eq!(value["routes"][6]["outcome"]["distance"], 7);
}

#[test]
fn test_unknown_start_fails_without_panic() {
    let output = wayfind(&["dfs", "--start", "Z"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("start node not found: Z"));
    assert!(!stderr.contains("panicked"));
}

#[test]
fn test_unknown_destination_fails() {
    let output = wayfind(&["shortest", "--to", "Q"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("node not found: Q"));
}

#[test]
fn test_demo_shows_continuation_then_reset() {
    let output = wayfind(&["demo"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("DFS (using Stack) from A: A B C D E F G H I"));
    // Second DFS shares the visited set, so only E is new.
    assert!(text.contains("DFS (using Stack) from E: E\n"));
    assert!(text.contains("BFS (using Queue) from A: A D C B E F G H I"));
    assert!(text.contains("Shortest paths from E:"));
}

#[test]
fn test_demo_json_is_valid() {
    let output = wayfind(&["demo", "--format", "json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["dfs"][1]["order"], serde_json::json!(["E"]));
    assert_eq!(value["adjacency"].as_array().unwrap().len(), 9);
}

/// Test graph operations through the library
#[test]
fn test_library_matches_binary() {
    use wayfind_core::{Graph, Weight, shortest_paths};

    let matrix: Vec<Vec<Weight>> = vec![vec![0, 3], vec![0, 0]];
    let graph = Graph::from_matrix(&matrix, &["P", "Q"]).unwrap();
    let result = shortest_paths(&graph, "P").unwrap();
    assert_eq!(result.route_to("Q").unwrap().distance(), Some(3));
}
