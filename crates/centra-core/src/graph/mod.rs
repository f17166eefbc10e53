//! Co-occurrence graph construction and partitioning.
//!
//! ## Pipeline
//!
//! ```text
//! EdgeList (deduplicated, no self-loops)
//!        ↓  build::CoGraph::from_edges()
//! CoGraph (UnGraph<String, f64>, possibly disconnected)
//!        ↓  components::Partition::of()
//! Partition (one induced subgraph per connected component)
//!        ↓  stats::min_degree_node()
//! NodeDegree (the node with the fewest connections)
//! ```

pub mod build;
pub mod components;
pub mod stats;

pub use build::CoGraph;
pub use components::{Component, Partition, PartitionSummary};
pub use stats::{NodeDegree, min_degree_node};
