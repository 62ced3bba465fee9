//! Command-line evaluation of a graph configuration.
//!
//! Reads a JSON graph configuration from a file or from stdin, evaluates the
//! terminal node (or the node given with `--node`) and prints one value per
//! line. Without real inputs the graph is fed synthetic `[0, 1, ...]` data.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use burn::tensor::backend::Backend;
use clap::Parser;
use instmodel_graph::InferenceBackend;
use instmodel_graph::config::GraphConfig;
use instmodel_graph::graph::{DummySource, Graph, Source, VectorSource};

#[derive(Parser)]
#[command(name = "instmodel-graph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Graph configuration (JSON). Read from stdin if omitted and stdin is
    /// not a terminal; otherwise a built-in demo graph is used.
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Evaluate this node instead of the terminal node
    #[arg(short, long)]
    node: Option<usize>,

    /// Input values (JSON object: group name -> variable name -> value)
    #[arg(short, long)]
    inputs: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> Result<GraphConfig> {
    if let Some(path) = &cli.config {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        return GraphConfig::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing {}", path.display()));
    }
    if io::stdin().is_terminal() {
        log::info!("No configuration given, using the demo graph");
        return Ok(GraphConfig::demo());
    }
    GraphConfig::from_reader(io::stdin().lock()).context("parsing configuration from stdin")
}

fn load_source(cli: &Cli, config: &GraphConfig) -> Result<Box<dyn Source>> {
    let Some(path) = &cli.inputs else {
        return Ok(Box::new(DummySource::from_config(config)));
    };
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let values: HashMap<String, HashMap<String, f32>> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(Box::new(VectorSource::from_named(&config.inputs, &values)?))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let device = <InferenceBackend as Backend>::Device::default();
    let graph = Graph::<InferenceBackend>::from_config(&config, &device)
        .context("building graph")?;
    log::info!(
        "Graph has {} nodes and {} layer stacks",
        graph.node_count(),
        graph.stack_count()
    );

    let source = load_source(&cli, &config)?;
    let output = match cli.node {
        Some(node) => graph.compute_node(source.as_ref(), node)?,
        None => graph.compute(source.as_ref())?,
    };

    for value in output {
        println!("{}", value);
    }
    Ok(())
}
