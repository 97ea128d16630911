//! CLI entry point for the `gwalk` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graph_walk::cli::{commands, OutputFormat};
use graph_walk::graph::TraversalOrder;
use graph_walk::GraphError;

#[derive(Parser)]
#[command(
    name = "gwalk",
    about = "graph-walk CLI — depth-first and breadth-first traversal of undirected graphs"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the 7-node demonstration graph and traverse it from node 0
    Demo,
    /// Write the demonstration graph to a JSON file
    Init {
        /// Path to the graph file to create
        file: PathBuf,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Print the adjacency of a graph file
    Show {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Depth-first traversal
    Dfs {
        /// Path to the graph file
        file: PathBuf,
        /// Start node (defaults to the file's start, then 0)
        #[arg(long, allow_hyphen_values = true)]
        start: Option<i64>,
    },
    /// Breadth-first traversal
    Bfs {
        /// Path to the graph file
        file: PathBuf,
        /// Start node (defaults to the file's start, then 0)
        #[arg(long, allow_hyphen_values = true)]
        start: Option<i64>,
        /// Print the nodes first reached in each wave
        #[arg(long)]
        waves: bool,
    },
    /// Print the graph, then its DFS and BFS orders
    Traverse {
        /// Path to the graph file
        file: PathBuf,
        /// Start node (defaults to the file's start, then 0)
        #[arg(long, allow_hyphen_values = true)]
        start: Option<i64>,
    },
    /// Statistics about a graph file
    Stats {
        /// Path to the graph file
        file: PathBuf,
        /// Start node used for the reachability count
        #[arg(long, allow_hyphen_values = true)]
        start: Option<i64>,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format.is_json();

    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Demo => commands::cmd_demo(json),
        Commands::Init { file, pretty } => commands::cmd_init(&file, pretty),
        Commands::Show { file } => commands::cmd_show(&file, json),
        Commands::Dfs { file, start } => {
            commands::cmd_walk(&file, start, TraversalOrder::DepthFirst, json)
        }
        Commands::Bfs { file, start, waves } => {
            if waves {
                commands::cmd_waves(&file, start, json)
            } else {
                commands::cmd_walk(&file, start, TraversalOrder::BreadthFirst, json)
            }
        }
        Commands::Traverse { file, start } => commands::cmd_traverse(&file, start, json),
        Commands::Stats { file, start } => commands::cmd_stats(&file, start, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) => 2,
            e if e.is_invalid_input() => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
