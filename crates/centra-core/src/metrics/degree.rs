//! Degree centrality: the fraction of other nodes a node touches.

use petgraph::graph::UnGraph;

/// Normalized degree `degree / (n - 1)` for every node of `g`.
///
/// Scores are indexed by `NodeIndex::index()`. A single-node graph scores
/// 1.0, matching the convention that an isolated node is trivially connected
/// to everything in its (one-node) component.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn degree_centrality<N>(g: &UnGraph<N, f64>) -> Vec<f64> {
    let n = g.node_count();
    if n <= 1 {
        return vec![1.0; n];
    }

    let scale = 1.0 / (n - 1) as f64;
    g.node_indices()
        .map(|v| g.neighbors(v).count() as f64 * scale)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::NodeIndex;

    fn make(n: usize, edges: &[(usize, usize)]) -> UnGraph<(), f64> {
        let mut g = UnGraph::new_undirected();
        for _ in 0..n {
            g.add_node(());
        }
        for &(a, b) in edges {
            g.add_edge(NodeIndex::new(a), NodeIndex::new(b), 1.0);
        }
        g
    }

    #[test]
    fn empty_graph_is_empty() {
        assert!(degree_centrality(&make(0, &[])).is_empty());
    }

    #[test]
    fn single_node_is_one() {
        assert_eq!(degree_centrality(&make(1, &[])), vec![1.0]);
    }

    #[test]
    fn pair_is_one() {
        assert_eq!(degree_centrality(&make(2, &[(0, 1)])), vec![1.0, 1.0]);
    }

    #[test]
    fn star_hub_is_one_leaves_are_third() {
        let dc = degree_centrality(&make(4, &[(0, 1), (0, 2), (0, 3)]));
        assert!((dc[0] - 1.0).abs() < 1e-12);
        for leaf in &dc[1..] {
            assert!((leaf - 1.0 / 3.0).abs() < 1e-12);
        }
    }
}
