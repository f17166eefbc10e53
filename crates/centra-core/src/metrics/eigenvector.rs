//! Eigenvector centrality via power iteration.
//!
//! # Overview
//!
//! Eigenvector centrality scores nodes by the company they keep: a node is
//! central when its neighbours are central. It is the principal eigenvector
//! of the weighted adjacency matrix.
//!
//! # Algorithm
//!
//! Power iteration on `A + I`:
//!
//! 1. Start from the uniform vector (summing to 1).
//! 2. `x'(v) = x(v) + Σ w(u, v) · x(u)` over neighbours `u`.
//! 3. Normalize `x'` to unit L2 norm.
//! 4. Stop once `Σ |x' - x| < n · tolerance`.
//!
//! Adding the identity keeps the principal eigenvector but shifts every
//! eigenvalue by one, so bipartite components (paths, stars) converge
//! instead of oscillating between two vectors.
//!
//! Run this per connected component. On a disconnected graph the
//! principal eigenvector concentrates on one component and the others decay
//! towards zero.

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use tracing::trace;

/// Result of eigenvector centrality computation.
#[derive(Debug, Clone)]
pub struct EigenvectorResult {
    /// Scores indexed by `NodeIndex::index()`, unit L2 norm.
    pub scores: Vec<f64>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether the algorithm converged within `max_iter`.
    pub converged: bool,
}

/// Compute eigenvector centrality for one connected component.
///
/// # Arguments
///
/// * `g`: an undirected weighted graph, ideally connected.
/// * `max_iter`: maximum number of iterations.
/// * `tolerance`: per-node convergence tolerance; the L1 change of the
///   whole vector must fall below `n * tolerance`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn eigenvector_centrality<N>(
    g: &UnGraph<N, f64>,
    max_iter: usize,
    tolerance: f64,
) -> EigenvectorResult {
    let n = g.node_count();

    if n == 0 {
        return EigenvectorResult {
            scores: Vec::new(),
            iterations: 0,
            converged: true,
        };
    }

    let mut scores = vec![1.0 / n as f64; n];
    let threshold = n as f64 * tolerance;

    for iter in 0..max_iter {
        let mut next = scores.clone();

        for v in g.node_indices() {
            let vi = v.index();
            for edge in g.edges(v) {
                let u = other_end(edge.source(), edge.target(), v);
                next[u.index()] += scores[vi] * *edge.weight();
            }
        }

        let norm = next.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            for x in &mut next {
                *x /= norm;
            }
        }

        let diff: f64 = scores
            .iter()
            .zip(&next)
            .map(|(a, b)| (a - b).abs())
            .sum();

        scores = next;
        trace!(iteration = iter + 1, diff, "power iteration step");

        if diff < threshold {
            return EigenvectorResult {
                scores,
                iterations: iter + 1,
                converged: true,
            };
        }
    }

    EigenvectorResult {
        scores,
        iterations: max_iter,
        converged: false,
    }
}

fn other_end(source: NodeIndex, target: NodeIndex, from: NodeIndex) -> NodeIndex {
    if source == from { target } else { source }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

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
    fn empty_graph_returns_empty() {
        let result = eigenvector_centrality(&make(0, &[]), 100, 1e-6);
        assert!(result.scores.is_empty());
        assert!(result.converged);
    }

    #[test]
    fn single_node_scores_one() {
        let result = eigenvector_centrality(&make(1, &[]), 100, 1e-6);
        assert!(result.converged);
        assert!((result.scores[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn pair_scores_are_equal() {
        let result = eigenvector_centrality(&make(2, &[(0, 1)]), 100, 1e-6);
        assert!(result.converged);
        let expected = 1.0 / 2.0_f64.sqrt();
        assert!((result.scores[0] - expected).abs() < 1e-6);
        assert!((result.scores[1] - expected).abs() < 1e-6);
    }

    #[test]
    fn star_center_highest() {
        let result = eigenvector_centrality(&make(4, &[(0, 1), (0, 2), (0, 3)]), 100, 1e-6);
        assert!(result.converged, "star is bipartite but A + I converges");
        assert!(result.scores[0] > result.scores[1]);
        assert!((result.scores[1] - result.scores[2]).abs() < 1e-6);
        assert!((result.scores[2] - result.scores[3]).abs() < 1e-6);
    }

    #[test]
    fn star_matches_closed_form() {
        // K_{1,3}: principal eigenvalue sqrt(3); hub/leaf ratio = sqrt(3).
        let result = eigenvector_centrality(&make(4, &[(0, 1), (0, 2), (0, 3)]), 1000, 1e-10);
        let ratio = result.scores[0] / result.scores[1];
        assert!((ratio - 3.0_f64.sqrt()).abs() < 1e-4, "ratio {ratio}");
    }

    #[test]
    fn path_middle_nodes_highest() {
        let result = eigenvector_centrality(&make(4, &[(0, 1), (1, 2), (2, 3)]), 100, 1e-6);
        assert!(result.scores[1] > result.scores[0]);
        assert!(result.scores[2] > result.scores[3]);
        assert!((result.scores[1] - result.scores[2]).abs() < 1e-5);
    }

    #[test]
    fn scores_have_unit_norm() {
        let result = eigenvector_centrality(
            &make(5, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4)]),
            100,
            1e-6,
        );
        let norm: f64 = result.scores.iter().map(|x| x * x).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
        assert!(result.scores.iter().all(|x| *x >= 0.0));
    }

    #[test]
    fn tiny_budget_does_not_converge() {
        let result = eigenvector_centrality(&make(4, &[(0, 1), (1, 2), (2, 3)]), 1, 1e-12);
        assert!(!result.converged);
        assert_eq!(result.iterations, 1);
    }
}
