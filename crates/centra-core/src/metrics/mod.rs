//! Centrality metrics for the co-occurrence graph.
//!
//! # Overview
//!
//! Three metrics, each answering a different question about a node:
//!
//! - **Betweenness** (`betweenness`): does the node broker between groups?
//! - **Eigenvector** (`eigenvector`): is the node connected to other
//!   well-connected nodes?
//! - **Degree** (`degree`): how many others does it touch directly?
//!
//! The per-metric functions operate on a single component and return scores
//! indexed by local `NodeIndex`. [`CentralityEngine`] runs them over every
//! component of a [`crate::graph::Partition`] and merges the results into one
//! [`CentralityScores`] per metric, in global node order.
//!
//! ```rust,ignore
//! use centra_core::config::CentralityConfig;
//! use centra_core::metrics::CentralityEngine;
//!
//! let engine = CentralityEngine::new(CentralityConfig::default());
//! let report = engine.compute(&graph, &partition)?;
//! let top = report.betweenness.get("CAPTAIN AMERICA");
//! ```

use std::fmt;

use serde::Serialize;

pub mod betweenness;
pub mod degree;
pub mod eigenvector;
mod engine;

pub use engine::{CentralityEngine, CentralityReport};

/// The centrality measures this crate computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Betweenness,
    Eigenvector,
    Degree,
}

impl Metric {
    /// All metrics in report order.
    pub const ALL: [Self; 3] = [Self::Betweenness, Self::Eigenvector, Self::Degree];

    /// Column title used in tables and charts.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Betweenness => "Betweenness Centrality",
            Self::Eigenvector => "Eigenvector Centrality",
            Self::Degree => "Degree Centrality",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One metric's scores for every node, in graph node order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentralityScores {
    pub metric: Metric,
    entries: Vec<(String, f64)>,
}

impl CentralityScores {
    #[must_use]
    pub const fn new(metric: Metric, entries: Vec<(String, f64)>) -> Self {
        Self { metric, entries }
    }

    /// Score of `label`, if it is a node of the graph.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, s)| *s)
    }

    /// `(label, score)` pairs in node order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(l, s)| (l.as_str(), *s))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
