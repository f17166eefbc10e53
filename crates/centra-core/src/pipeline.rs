//! The full load → assemble → partition → compute → rank pipeline.

use std::path::Path;

use tracing::{info, instrument};

use crate::config::Config;
use crate::edges::{EdgeList, load_edges};
use crate::error::Result;
use crate::graph::{CoGraph, Partition};
use crate::metrics::{CentralityEngine, CentralityReport};
use crate::report::NetworkReport;

/// Every artifact of one analysis run.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub edges: EdgeList,
    pub graph: CoGraph,
    pub partition: Partition,
    pub centrality: CentralityReport,
    pub report: NetworkReport,
}

/// Run the pipeline over raw `(source, target)` pairs.
///
/// # Errors
///
/// Propagates [`crate::AnalysisError`] from any stage; nothing is retried.
#[instrument(skip_all)]
pub fn analyze_pairs<I, S>(pairs: I, config: &Config) -> Result<Analysis>
where
    I: IntoIterator<Item = (S, S)>,
    S: Into<String>,
{
    let edges = EdgeList::from_pairs(pairs)?;
    let graph = CoGraph::from_edges(&edges)?;
    let partition = Partition::of(&graph);
    let centrality = CentralityEngine::new(config.centrality.clone()).compute(&graph, &partition)?;
    let report = NetworkReport::build(&graph, &partition, &centrality, config.report.top_k);

    info!(
        nodes = report.node_count,
        edges = report.edge_count,
        components = report.partition.component_count,
        "analysis complete"
    );

    Ok(Analysis {
        edges,
        graph,
        partition,
        centrality,
        report,
    })
}

/// Load an edge file and run the pipeline over it.
///
/// # Errors
///
/// Returns [`crate::AnalysisError::Io`] or
/// [`crate::AnalysisError::MalformedInput`] for bad input, and anything
/// [`analyze_pairs`] returns.
pub fn analyze_file(path: &Path, config: &Config) -> Result<Analysis> {
    let pairs = load_edges(path)?;
    analyze_pairs(pairs, config)
}
