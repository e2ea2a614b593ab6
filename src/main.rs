//! Wayfind CLI entry point

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod sample;

#[derive(Parser)]
#[command(name = "wayfind")]
#[command(about = "DFS, BFS and Dijkstra over a weighted adjacency matrix", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every node with its outgoing (destination, weight) pairs
    Dump,
    /// Depth-first search
    Dfs {
        /// Label to start from
        #[arg(short, long, default_value = "A")]
        start: String,
    },
    /// Breadth-first search
    Bfs {
        /// Label to start from
        #[arg(short, long, default_value = "A")]
        start: String,
    },
    /// Dijkstra shortest paths to every node
    Shortest {
        /// Label to start from
        #[arg(short, long, default_value = "A")]
        start: String,

        /// Only report the route to this label
        #[arg(short, long)]
        to: Option<String>,
    },
    /// Run the full walkthrough on the built-in graph
    Demo,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; results go to stdout, logs to stderr
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "wayfind={0},wayfind_core={0}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Wayfind v{}", env!("CARGO_PKG_VERSION"));

    let graph = sample::graph()?;

    match cli.command {
        Commands::Dump => commands::dump(&graph, cli.format),
        Commands::Dfs { start } => commands::dfs(&graph, &start, cli.format),
        Commands::Bfs { start } => commands::bfs(&graph, &start, cli.format),
        Commands::Shortest { start, to } => {
            commands::shortest(&graph, &start, to.as_deref(), cli.format)
        }
        Commands::Demo => commands::demo(&graph, cli.format),
        Commands::Version => {
            println!("Wayfind v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
