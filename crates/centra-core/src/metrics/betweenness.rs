//! Betweenness centrality via Brandes' algorithm with source sampling.
//!
//! # Overview
//!
//! Betweenness centrality measures how often a node lies on shortest paths
//! between other pairs of nodes. High-betweenness nodes are brokers between
//! otherwise weakly connected groups.
//!
//! # Algorithm
//!
//! Brandes (2001), weighted variant:
//!
//! 1. For each source `s`, run Dijkstra to get shortest-path counts
//!    (`sigma`) and predecessor lists.
//! 2. Accumulate dependencies in reverse settle order.
//! 3. Sum dependencies over sources.
//!
//! Running every node as a source costs O(V·E·log V). On large components we
//! use only `k` sources drawn uniformly without replacement and scale the
//! result by `n / k`, which gives an unbiased estimate.
//!
//! # Normalization
//!
//! Undirected scores are multiplied by `1 / ((n-1)(n-2))`, so every score
//! lies in `[0, 1]`. Each unordered pair is visited from both ends, which the
//! factor of two inside that denominator accounts for. Components with two or
//! fewer nodes have no interior nodes and score 0 everywhere.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use rand::Rng;

/// Dijkstra frontier entry, ordered so the heap pops the smallest distance.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    dist: f64,
    node: usize,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Raw (unnormalized) betweenness accumulated from the given sources.
///
/// Returns one score per node, indexed by `NodeIndex::index()`.
#[must_use]
pub fn accumulate<N>(g: &UnGraph<N, f64>, sources: &[NodeIndex]) -> Vec<f64> {
    let n = g.node_count();
    let mut cb = vec![0.0; n];

    for &s in sources {
        let si = s.index();

        // Nodes in settle order; popped farthest-first during accumulation.
        let mut stack: Vec<usize> = Vec::with_capacity(n);
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut sigma = vec![0.0_f64; n];
        let mut best = vec![f64::INFINITY; n];
        let mut settled = vec![false; n];

        sigma[si] = 1.0;
        best[si] = 0.0;

        let mut heap = BinaryHeap::new();
        heap.push(Frontier { dist: 0.0, node: si });

        while let Some(Frontier { dist, node: v }) = heap.pop() {
            if settled[v] {
                continue;
            }
            settled[v] = true;
            stack.push(v);

            for edge in g.edges(NodeIndex::new(v)) {
                let w = if edge.source().index() == v {
                    edge.target().index()
                } else {
                    edge.source().index()
                };
                if settled[w] {
                    continue;
                }

                let candidate = dist + *edge.weight();
                if same_length(candidate, best[w]) {
                    sigma[w] += sigma[v];
                    predecessors[w].push(v);
                } else if candidate < best[w] {
                    best[w] = candidate;
                    sigma[w] = sigma[v];
                    predecessors[w].clear();
                    predecessors[w].push(v);
                    heap.push(Frontier {
                        dist: candidate,
                        node: w,
                    });
                }
            }
        }

        let mut delta = vec![0.0_f64; n];
        while let Some(w) = stack.pop() {
            for &v in &predecessors[w] {
                if sigma[w] > 0.0 {
                    delta[v] += (sigma[v] / sigma[w]) * (1.0 + delta[w]);
                }
            }
            if w != si {
                cb[w] += delta[w];
            }
        }
    }

    cb
}

/// Normalized betweenness for a connected component, estimated from at most
/// `sample_size` sources.
///
/// When the component has no more than `sample_size` nodes every node is a
/// source and the result is exact; `rng` is not consumed in that case. A
/// `sample_size` of 0 selects no sources and every score is 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sampled_betweenness<N, R: Rng + ?Sized>(
    g: &UnGraph<N, f64>,
    sample_size: usize,
    rng: &mut R,
) -> Vec<f64> {
    let n = g.node_count();
    if n == 0 {
        return Vec::new();
    }

    let k = n.min(sample_size);
    if k == 0 {
        return vec![0.0; n];
    }
    let sources: Vec<NodeIndex> = if k == n {
        g.node_indices().collect()
    } else {
        let mut picked: Vec<usize> = rand::seq::index::sample(rng, n, k).into_vec();
        picked.sort_unstable();
        picked.into_iter().map(NodeIndex::new).collect()
    };

    let mut scores = accumulate(g, &sources);

    if n > 2 {
        let scale = 1.0 / ((n - 1) * (n - 2)) as f64 * (n as f64 / k as f64);
        for score in &mut scores {
            *score *= scale;
        }
    }

    scores
}

fn same_length(a: f64, b: f64) -> bool {
    b.is_finite() && (a - b).abs() <= f64::EPSILON * a.abs().max(1.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn make(labels: &[&str], edges: &[(usize, usize)]) -> UnGraph<String, f64> {
        let mut g = UnGraph::new_undirected();
        for l in labels {
            g.add_node((*l).to_string());
        }
        for &(a, b) in edges {
            g.add_edge(NodeIndex::new(a), NodeIndex::new(b), 1.0);
        }
        g
    }

    fn exact(g: &UnGraph<String, f64>) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(0);
        sampled_betweenness(g, usize::MAX, &mut rng)
    }

    #[test]
    fn empty_graph_returns_empty() {
        let g = make(&[], &[]);
        assert!(exact(&g).is_empty());
    }

    #[test]
    fn single_node_zero_betweenness() {
        let g = make(&["A"], &[]);
        assert_eq!(exact(&g), vec![0.0]);
    }

    #[test]
    fn pair_has_zero_betweenness() {
        let g = make(&["A", "B"], &[(0, 1)]);
        assert_eq!(exact(&g), vec![0.0, 0.0]);
    }

    #[test]
    fn path_middle_node_is_one() {
        // A — B — C: B sits on the only A↔C path.
        let g = make(&["A", "B", "C"], &[(0, 1), (1, 2)]);
        let bc = exact(&g);
        assert!(bc[0].abs() < 1e-12);
        assert!((bc[1] - 1.0).abs() < 1e-12, "B = {}", bc[1]);
        assert!(bc[2].abs() < 1e-12);
    }

    #[test]
    fn path_of_four_inner_nodes() {
        // A — B — C — D: B lies on A↔C, A↔D (2 of 3 pairs) → 2/3.
        let g = make(&["A", "B", "C", "D"], &[(0, 1), (1, 2), (2, 3)]);
        let bc = exact(&g);
        assert!((bc[1] - 2.0 / 3.0).abs() < 1e-12, "B = {}", bc[1]);
        assert!((bc[2] - 2.0 / 3.0).abs() < 1e-12, "C = {}", bc[2]);
    }

    #[test]
    fn star_center_is_one() {
        let g = make(&["H", "a", "b", "c", "d"], &[(0, 1), (0, 2), (0, 3), (0, 4)]);
        let bc = exact(&g);
        assert!((bc[0] - 1.0).abs() < 1e-12, "hub = {}", bc[0]);
        assert!(bc[1..].iter().all(|b| b.abs() < 1e-12));
    }

    #[test]
    fn diamond_splits_paths() {
        // A—B—D, A—C—D: B and C each carry half of A↔D.
        // raw = 2 * 0.5 = 1, scale 1/(3*2) → 1/6.
        let g = make(&["A", "B", "C", "D"], &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        let bc = exact(&g);
        assert!((bc[1] - 1.0 / 6.0).abs() < 1e-12, "B = {}", bc[1]);
        assert!((bc[2] - 1.0 / 6.0).abs() < 1e-12, "C = {}", bc[2]);
    }

    #[test]
    fn weights_change_shortest_paths() {
        // A—B—C with unit weights, plus a heavy direct A—C edge (weight 5):
        // B stays on the only shortest A↔C path.
        let mut g = make(&["A", "B", "C"], &[(0, 1), (1, 2)]);
        g.add_edge(NodeIndex::new(0), NodeIndex::new(2), 5.0);
        let bc = exact(&g);
        assert!((bc[1] - 1.0).abs() < 1e-12, "B = {}", bc[1]);
    }

    #[test]
    fn scores_within_unit_interval() {
        let g = make(
            &["A", "B", "C", "D", "E", "F"],
            &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3)],
        );
        for b in exact(&g) {
            assert!((0.0..=1.0).contains(&b), "{b}");
        }
    }

    #[test]
    fn sampling_is_reproducible_for_a_seed() {
        let labels: Vec<String> = (0..30).map(|i| format!("n{i}")).collect();
        let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        let edges: Vec<(usize, usize)> = (0..29).map(|i| (i, i + 1)).collect();
        let g = make(&refs, &edges);

        let a = sampled_betweenness(&g, 5, &mut StdRng::seed_from_u64(7));
        let b = sampled_betweenness(&g, 5, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn zero_sample_scores_nothing() {
        let g = make(&["A", "B", "C"], &[(0, 1), (1, 2)]);
        let bc = sampled_betweenness(&g, 0, &mut StdRng::seed_from_u64(42));
        assert_eq!(bc, vec![0.0; 3]);
    }

    #[test]
    fn sampled_path_keeps_endpoints_at_zero() {
        let labels: Vec<String> = (0..30).map(|i| format!("n{i}")).collect();
        let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        let edges: Vec<(usize, usize)> = (0..29).map(|i| (i, i + 1)).collect();
        let g = make(&refs, &edges);

        let bc = sampled_betweenness(&g, 10, &mut StdRng::seed_from_u64(42));
        assert!(bc[0].abs() < 1e-12);
        assert!(bc[29].abs() < 1e-12);
        assert!(bc[1..29].iter().any(|b| *b > 0.0));
    }
}
