//! The end-of-run network report.

use serde::Serialize;
use tracing::instrument;

use crate::graph::{CoGraph, NodeDegree, Partition, PartitionSummary, min_degree_node};
use crate::metrics::CentralityReport;
use crate::rank::RankedTable;

/// Everything printed at the end of an analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkReport {
    pub node_count: usize,
    /// Total number of connections (cleaned edges).
    pub edge_count: usize,
    pub partition: PartitionSummary,
    /// Node with the fewest connections.
    pub min_degree: Option<NodeDegree>,
    /// Top-k tables for betweenness, eigenvector, and degree, in that order.
    pub rankings: Vec<RankedTable>,
}

impl NetworkReport {
    #[must_use]
    #[instrument(skip_all, fields(top_k = top_k))]
    pub fn build(
        g: &CoGraph,
        partition: &Partition,
        centrality: &CentralityReport,
        top_k: usize,
    ) -> Self {
        let rankings = centrality
            .iter()
            .map(|scores| RankedTable::from_scores(scores).top(top_k))
            .collect();

        Self {
            node_count: g.node_count(),
            edge_count: g.edge_count(),
            partition: partition.summary(),
            min_degree: min_degree_node(g),
            rankings,
        }
    }
}
