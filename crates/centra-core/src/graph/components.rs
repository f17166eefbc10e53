//! Connected-component partitioning.
//!
//! Betweenness and eigenvector centrality are only meaningful within a
//! connected component, so every metric runs per component. A connected
//! graph is simply a partition with one component.
//!
//! Components are discovered by BFS from each unvisited node in node order,
//! so component order and the node order inside each component both follow
//! the graph's insertion order.

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::{Bfs, EdgeRef};
use serde::Serialize;
use tracing::{debug, info, instrument};

use super::build::CoGraph;

/// A maximal connected induced subgraph.
#[derive(Debug, Clone)]
pub struct Component {
    /// Induced subgraph with local node indices.
    pub graph: UnGraph<String, f64>,
    /// `global[local.index()]` is the node's index in the parent graph.
    pub global: Vec<NodeIndex>,
}

impl Component {
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Local index of a global node, if it belongs to this component.
    ///
    /// `global` is sorted, so this is a binary search.
    #[must_use]
    pub fn local(&self, global: NodeIndex) -> Option<NodeIndex> {
        self.global.binary_search(&global).ok().map(NodeIndex::new)
    }
}

/// The connected components of a [`CoGraph`].
#[derive(Debug, Clone)]
pub struct Partition {
    pub components: Vec<Component>,
}

/// Serializable summary of a partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionSummary {
    pub connected: bool,
    pub component_count: usize,
    /// Node counts per component, largest first.
    pub sizes: Vec<usize>,
}

impl Partition {
    /// Partition `g` into connected components.
    #[must_use]
    #[instrument(skip(g), fields(nodes = g.node_count()))]
    pub fn of(g: &CoGraph) -> Self {
        let n = g.node_count();
        let mut component_of: Vec<Option<usize>> = vec![None; n];
        let mut members: Vec<Vec<NodeIndex>> = Vec::new();

        for start in g.graph.node_indices() {
            if component_of[start.index()].is_some() {
                continue;
            }
            let id = members.len();
            let mut nodes = Vec::new();
            let mut bfs = Bfs::new(&g.graph, start);
            while let Some(v) = bfs.next(&g.graph) {
                component_of[v.index()] = Some(id);
                nodes.push(v);
            }
            // Keep node order inside the component equal to global order.
            nodes.sort_unstable();
            members.push(nodes);
        }

        let mut components: Vec<Component> = members
            .into_iter()
            .map(|global| {
                let mut graph = UnGraph::<String, f64>::with_capacity(global.len(), 0);
                for &v in &global {
                    graph.add_node(g.graph[v].clone());
                }
                Component { graph, global }
            })
            .collect();

        for edge in g.graph.edge_references() {
            let (a, b) = (edge.source(), edge.target());
            if let Some(c) = component_of[a.index()] {
                let comp = &mut components[c];
                if let (Some(la), Some(lb)) = (comp.local(a), comp.local(b)) {
                    comp.graph.add_edge(la, lb, *edge.weight());
                }
            }
        }

        if components.len() > 1 {
            info!(
                components = components.len(),
                "graph is not connected; computing centralities per component"
            );
        } else {
            info!("graph is connected; computing centralities for the entire graph");
        }
        for (i, comp) in components.iter().enumerate() {
            debug!(
                component = i + 1,
                nodes = comp.node_count(),
                edges = comp.edge_count(),
                "component"
            );
        }

        Self { components }
    }

    /// True when the graph is a single connected component.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.components.len() == 1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    #[must_use]
    pub fn summary(&self) -> PartitionSummary {
        let mut sizes: Vec<usize> = self.components.iter().map(Component::node_count).collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        PartitionSummary {
            connected: self.is_connected(),
            component_count: self.components.len(),
            sizes,
        }
    }
}
