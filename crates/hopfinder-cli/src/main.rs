//! `hopfinder` - plan routes through a JSON graph from the command line.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use hopfinder_core::{Algorithm, HopfinderConfig, NodeId};

mod commands;

/// Exit code when the endpoints are not connected.
const EXIT_NO_PATH: u8 = 2;

/// Hopfinder - shortest routes through static graphs
#[derive(Parser, Debug)]
#[command(name = "hopfinder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (default: ./hopfinder.toml if present)
    #[arg(short, long, global = true, env = "HOPFINDER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find a route between two nodes
    Route(RouteArgs),

    /// Summarize a graph file
    Stats {
        /// Graph file (JSON array or keyed object of node records)
        #[arg(short, long)]
        graph: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(clap::Args, Debug)]
struct RouteArgs {
    /// Graph file (JSON array or keyed object of node records)
    #[arg(short, long)]
    graph: PathBuf,

    /// Source node ID
    #[arg(long)]
    from: NodeId,

    /// Target node ID
    #[arg(long)]
    to: NodeId,

    /// Solver: fast (fewest hops) or weighted; overrides the configuration
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Node ID the route must not pass through (repeatable)
    #[arg(long = "avoid", value_name = "ID")]
    avoid: Vec<NodeId>,

    /// Directed edge the route must not use, as FROM:TO (repeatable)
    #[arg(long = "avoid-edge", value_name = "FROM:TO", value_parser = parse_edge)]
    avoid_edges: Vec<(NodeId, NodeId)>,

    /// Numeric payload field used as the cost of entering a node (weighted only)
    #[arg(long, value_name = "NAME")]
    cost_field: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_edge(s: &str) -> Result<(NodeId, NodeId), String> {
    let (from, to) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FROM:TO, got '{s}'"))?;
    let from = from
        .trim()
        .parse()
        .map_err(|e| format!("invalid FROM in '{s}': {e}"))?;
    let to = to
        .trim()
        .parse()
        .map_err(|e| format!("invalid TO in '{s}': {e}"))?;
    Ok((from, to))
}

fn init_tracing(config: &HopfinderConfig) -> anyhow::Result<()> {
    // RUST_LOG wins over the configured filter.
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.logging.filter)
            .with_context(|| format!("invalid logging.filter '{}'", config.logging.filter))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = HopfinderConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    init_tracing(&config)?;

    match cli.command {
        Command::Route(args) => commands::route(&config, &args),
        Command::Stats { graph, format } => commands::stats(&config, &graph, format),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            let no_path = err
                .downcast_ref::<hopfinder_core::Error>()
                .is_some_and(hopfinder_core::Error::is_no_path);
            if no_path {
                ExitCode::from(EXIT_NO_PATH)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
