//! Degree summaries for a co-occurrence graph.
//!
//! The report names the node with the fewest connections. Ties go to the
//! node that appears first in node order.

use serde::Serialize;

use super::build::CoGraph;

/// A node together with its degree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDegree {
    pub node: String,
    pub degree: usize,
}

/// Find the node with the fewest connections.
///
/// Returns `None` only for a graph with no nodes. On ties the first node in
/// node order wins.
#[must_use]
pub fn min_degree_node(g: &CoGraph) -> Option<NodeDegree> {
    let mut best: Option<NodeDegree> = None;
    for idx in g.graph.node_indices() {
        let degree = g.degree(idx);
        if best.as_ref().is_none_or(|b| degree < b.degree) {
            best = Some(NodeDegree {
                node: g.graph[idx].clone(),
                degree,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::EdgeList;

    fn build(pairs: &[(&str, &str)]) -> CoGraph {
        let edges = EdgeList::from_pairs(pairs.iter().copied()).expect("clean");
        CoGraph::from_edges(&edges).expect("build")
    }

    #[test]
    fn min_degree_prefers_first_on_ties() {
        let g = build(&[("A", "B"), ("B", "C")]);
        let min = min_degree_node(&g).expect("non-empty");
        assert_eq!(min.degree, 1);
        assert_eq!(min.node, "A");
    }

    #[test]
    fn min_degree_finds_unique_leaf() {
        // Triangle A-B-C plus pendant D on C.
        let g = build(&[("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")]);
        let min = min_degree_node(&g).expect("non-empty");
        assert_eq!(min.node, "D");
        assert_eq!(min.degree, 1);
    }
}
