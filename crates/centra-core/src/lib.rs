#![forbid(unsafe_code)]
//! centra-core library.
//!
//! Centrality analysis for co-occurrence networks: load an edge list, build
//! an undirected graph, split it into connected components, score every node
//! by betweenness, eigenvector, and degree centrality, and rank the results.
//!
//! # Conventions
//!
//! - **Errors**: Library functions return [`Result`] with [`AnalysisError`];
//!   binaries wrap it in `anyhow`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `debug!`, `trace!`).

pub mod config;
pub mod edges;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod pipeline;
pub mod rank;
pub mod report;

pub use error::{AnalysisError, ErrorCode, Result};
pub use pipeline::{Analysis, analyze_file, analyze_pairs};
