//! Signal Graph CLI
//!
//! Terminal front end for the pipeline:
//!
//! - `refresh`: acquire signals from the public feeds, tag and persist
//! - `signals`: print the persisted batch
//! - `graph`: run the core pipeline and print the scenario graph
//!
//! The CLI owns the collaborator lifecycle the same way the server does:
//! load before the core runs, persist after tagging.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use signal_graph_core::config::Config;
use signal_graph_core::pipeline::process;
use signal_graph_core::tagging::tag_signals;
use signal_graph_ingest::{load_ontology, Acquirer, SignalStore};

/// Signal Graph - signal clustering and scenario graphs
#[derive(Parser)]
#[command(name = "signal-graph")]
#[command(version)]
#[command(about = "Cluster public news signals and synthesize scenario graphs")]
struct Cli {
    /// Path to a TOML configuration file (layered config used otherwise)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Acquire signals from the public feeds, tag and persist them
    Refresh,
    /// Print the persisted signal batch as JSON
    Signals,
    /// Run the pipeline over the persisted batch and print the graph
    Graph {
        /// Print the full outcome (clusters, selection, edges) instead
        /// of just the graph
        #[arg(long)]
        full: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Refresh => cmd_refresh(&config).await,
        Commands::Signals => cmd_signals(&config),
        Commands::Graph { full } => cmd_graph(&config, full),
    }
}

async fn cmd_refresh(config: &Config) -> anyhow::Result<()> {
    let acquirer = Acquirer::new(&config.acquire)?;
    let store = SignalStore::new(config.storage.signals_path());

    let mut signals = acquirer.collect().await;
    if signals.is_empty() {
        println!("no signals collected; store left untouched");
        return Ok(());
    }

    let concepts = load_ontology(&config.storage.ontology_path());
    tag_signals(&mut signals, &concepts);
    store.save(&signals)?;

    info!(count = signals.len(), path = %store.path().display(), "batch persisted");
    println!("collected {} signals", signals.len());
    Ok(())
}

fn cmd_signals(config: &Config) -> anyhow::Result<()> {
    let store = SignalStore::new(config.storage.signals_path());
    let signals = store.load();
    println!("{}", serde_json::to_string_pretty(&signals)?);
    Ok(())
}

fn cmd_graph(config: &Config, full: bool) -> anyhow::Result<()> {
    let store = SignalStore::new(config.storage.signals_path());
    let mut signals = store.load();
    let concepts = load_ontology(&config.storage.ontology_path());

    let outcome = process(&mut signals, &concepts, &config.pipeline)?;
    if full {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&outcome.graph)?);
    }
    Ok(())
}
