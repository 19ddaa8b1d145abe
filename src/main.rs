//! Notegraph — CLI
//!
//! Runs the extraction and layout pipeline on a note file and prints JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use notegraph::{EngineConfig, GraphEngine, NodePosition, Simulation};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "notegraph")]
#[command(about = "Concept graph extraction and layout for note files")]
struct Cli {
    /// Path to a YAML config file overriding engine defaults
    #[arg(long, env = "NOTEGRAPH_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the concept graph from a note file and print nodes + links
    Extract {
        /// Note file (outline or markdown-style text)
        input: String,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Extract, run the force layout to rest, and print node positions
    Layout {
        /// Note file (outline or markdown-style text)
        input: String,

        /// Canvas width in layout units
        #[arg(long, default_value = "1200")]
        width: f64,

        /// Canvas height in layout units
        #[arg(long, default_value = "800")]
        height: f64,

        /// Maximum simulation ticks before giving up on settling
        #[arg(long, default_value = "1000")]
        max_ticks: u64,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// Layout command output shape.
#[derive(Serialize)]
struct LayoutOutput {
    positions: Vec<NodePosition>,
    ticks: u64,
    settled: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,notegraph=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_yaml_file(path)?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Commands::Extract { input, pretty } => run_extract(config, &input, pretty),
        Commands::Layout {
            input,
            width,
            height,
            max_ticks,
            pretty,
        } => run_layout(config, &input, width, height, max_ticks, pretty),
    }
}

fn read_note(path: &str) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read note file {path}"))
}

fn run_extract(config: EngineConfig, input: &str, pretty: bool) -> Result<()> {
    let text = read_note(input)?;
    let engine = GraphEngine::new(config.extractor)?;
    let data = engine.extract(&text).data();

    tracing::info!(nodes = data.nodes.len(), links = data.links.len(), "extracted {input}");
    print_json(&data, pretty)
}

fn run_layout(
    config: EngineConfig,
    input: &str,
    width: f64,
    height: f64,
    max_ticks: u64,
    pretty: bool,
) -> Result<()> {
    let text = read_note(input)?;
    let engine = GraphEngine::new(config.extractor)?;
    let graph = engine.extract(&text);

    let mut sim = Simulation::new(&graph, config.layout, width, height)?;
    let ticks = sim.run_to_rest(max_ticks);

    let output = LayoutOutput {
        positions: sim.positions(),
        ticks,
        settled: sim.is_settled(),
    };
    tracing::info!(ticks, settled = output.settled, "layout finished for {input}");
    print_json(&output, pretty)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
