//! Graph assembly from a cleaned edge list.
//!
//! Nodes are the distinct labels of the edge list, added in order of first
//! appearance. That insertion order is the iteration order every later stage
//! uses for tie-breaking.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use tracing::{debug, instrument};

use crate::edges::EdgeList;
use crate::error::{AnalysisError, Result};

/// An undirected weighted co-occurrence graph.
#[derive(Debug, Clone)]
pub struct CoGraph {
    /// Undirected graph: nodes = labels, edge weights = co-occurrence weight.
    pub graph: UnGraph<String, f64>,
    /// Mapping from label to petgraph `NodeIndex`.
    pub node_map: HashMap<String, NodeIndex>,
}

impl CoGraph {
    /// Build a [`CoGraph`] from an already-cleaned edge list.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyGraph`] if the edge list is empty.
    #[instrument(skip(edges), fields(edges = edges.len()))]
    pub fn from_edges(edges: &EdgeList) -> Result<Self> {
        if edges.is_empty() {
            return Err(AnalysisError::EmptyGraph);
        }

        let mut graph = UnGraph::<String, f64>::with_capacity(edges.len(), edges.len());
        let mut node_map: HashMap<String, NodeIndex> = HashMap::new();

        for edge in edges.edges() {
            let a = *node_map
                .entry(edge.source.clone())
                .or_insert_with(|| graph.add_node(edge.source.clone()));
            let b = *node_map
                .entry(edge.target.clone())
                .or_insert_with(|| graph.add_node(edge.target.clone()));

            // EdgeList already dropped repeats; guard anyway since petgraph allows multi-edges.
            if a != b && graph.find_edge(a, b).is_none() {
                graph.add_edge(a, b, edge.weight);
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph assembled"
        );

        Ok(Self { graph, node_map })
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up the `NodeIndex` for a label.
    #[must_use]
    pub fn node_index(&self, label: &str) -> Option<NodeIndex> {
        self.node_map.get(label).copied()
    }

    /// Return the label of a node.
    #[must_use]
    pub fn label(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// Number of distinct neighbours of `idx`.
    #[must_use]
    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.graph.neighbors(idx).count()
    }

    /// Whether an undirected edge joins the two labels.
    #[must_use]
    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        match (self.node_index(a), self.node_index(b)) {
            (Some(a), Some(b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    /// Labels in node (insertion) order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }
}
