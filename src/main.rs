use anyhow::Context;
use clap::Parser;
use pathx_core::{Dataset, Graph};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Shortest paths between named points on a weighted map
#[derive(Parser, Debug)]
#[command(name = "pathx")]
#[command(about = "Find the shortest path between two points of a map", long_about = None)]
struct Args {
    /// Path to the JSON map (nodes and links)
    dataset: PathBuf,

    /// Name of the node to start from
    #[arg(short, long, requires = "target")]
    source: Option<String>,

    /// Name of the node to reach
    #[arg(short, long, requires = "source")]
    target: Option<String>,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,

    /// Without a query, print the graph as `{nodes, edges}` JSON instead of
    /// the adjacency list
    #[arg(long, conflicts_with = "source")]
    json: bool,

    /// Log level, overridden by RUST_LOG when set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        level @ ("trace" | "debug" | "info" | "warn" | "error") => level,
        _ => "info",
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting pathx v{}", env!("CARGO_PKG_VERSION"));
    info!("Dataset: {:?}", args.dataset);

    let dataset = Dataset::from_path(&args.dataset)
        .with_context(|| format!("failed to load dataset {:?}", args.dataset))?;

    let (source, target) = match (&args.source, &args.target) {
        (Some(source), Some(target)) => (
            dataset
                .node(source)
                .with_context(|| format!("unknown source node {:?}", source))?
                .clone(),
            dataset
                .node(target)
                .with_context(|| format!("unknown target node {:?}", target))?
                .clone(),
        ),
        _ => {
            let graph = dataset.into_graph().context("failed to build graph")?;
            info!("Graph: {} nodes, {} edges", graph.node_count(), graph.edge_count());
            print!("{}", render_graph(&graph, args.json, args.pretty)?);
            return Ok(());
        }
    };

    let graph = dataset.into_graph().context("failed to build graph")?;
    info!("Graph: {} nodes, {} edges", graph.node_count(), graph.edge_count());

    let result = graph.shortest_path(&source, &target)?;
    if result.is_empty() {
        info!("{} is unreachable from {}", target, source);
    } else {
        info!(
            "{} -> {}: distance {}, {} edges, {:.3} ms",
            source,
            target,
            result.total_distance,
            result.total_edges,
            result.total_calculation_time
        );
    }

    println!("{}", to_json(&result, args.pretty)?);

    Ok(())
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// The graph as JSON (`{nodes, edges}`) or as the adjacency listing.
fn render_graph(graph: &Graph, json: bool, pretty: bool) -> serde_json::Result<String> {
    if json {
        Ok(to_json(graph, pretty)? + "\n")
    } else {
        Ok(graph.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathx_core::{Edge, Node};

    fn sample() -> Graph {
        let a = Node::new("A", 0, 0);
        let b = Node::new("B", 2, 1);
        Graph::new(vec![a.clone(), b.clone()], vec![Edge::new(a, b, 3)]).unwrap()
    }

    #[test]
    fn test_render_graph_json() {
        let rendered = render_graph(&sample(), true, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["nodes"][1]["name"], "B");
        assert_eq!(value["edges"][0]["source"]["name"], "A");
        assert_eq!(value["edges"][0]["distance"], 3);
        assert!(value.get("adjacency").is_none());

        let restored: Graph = serde_json::from_str(&rendered).unwrap();
        assert_eq!(restored.edge_count(), 1);
    }

    #[test]
    fn test_render_graph_listing() {
        let rendered = render_graph(&sample(), false, false).unwrap();
        assert!(rendered.contains("A --> B (3)"));
    }

    #[test]
    fn test_json_flag_parses() {
        let args = Args::try_parse_from(["pathx", "map.json", "--json", "--pretty"]).unwrap();
        assert!(args.json && args.pretty);
        assert!(Args::try_parse_from(["pathx", "map.json", "--json", "-s", "A", "-t", "B"]).is_err());
    }
}
