//! `centra components` — connectivity summary for an edge file.

use std::path::PathBuf;

use centra_core::edges::{EdgeList, load_edges};
use centra_core::graph::{CoGraph, Partition};
use clap::Args;
use serde::Serialize;

use crate::output::{OutputMode, pretty_kv, pretty_section, render};

/// Arguments for `centra components`.
#[derive(Args, Debug)]
pub struct ComponentsArgs {
    /// Two-column comma-separated edge file, no header.
    pub file: PathBuf,
}

/// Report payload for `centra components`.
#[derive(Debug, Serialize)]
pub struct ComponentsReport {
    pub connected: bool,
    pub component_count: usize,
    pub sizes: Vec<usize>,
    pub node_count: usize,
    pub edge_count: usize,
}

impl ComponentsReport {
    fn of(graph: &CoGraph, partition: &Partition) -> Self {
        let summary = partition.summary();
        Self {
            connected: summary.connected,
            component_count: summary.component_count,
            sizes: summary.sizes,
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
        }
    }
}

/// Execute `centra components`.
pub fn run_components(args: &ComponentsArgs, output: OutputMode) -> anyhow::Result<()> {
    let edges = EdgeList::from_pairs(load_edges(&args.file)?)?;
    let graph = CoGraph::from_edges(&edges)?;
    let partition = Partition::of(&graph);
    let payload = ComponentsReport::of(&graph, &partition);

    render(output, &payload, |p, w| {
        if output.is_pretty() {
            pretty_section(w, "Connectivity")?;
        }
        pretty_kv(w, "connected", p.connected.to_string())?;
        pretty_kv(w, "components", p.component_count.to_string())?;
        let sizes: Vec<String> = p.sizes.iter().map(ToString::to_string).collect();
        pretty_kv(w, "sizes", sizes.join(" "))?;
        pretty_kv(w, "nodes", p.node_count.to_string())?;
        pretty_kv(w, "edges", p.edge_count.to_string())
    })
}
