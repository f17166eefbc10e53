//! Property tests for the invariants the pipeline guarantees on any input.

use std::collections::HashSet;

use proptest::prelude::*;

use centra_core::config::Config;
use centra_core::edges::EdgeList;
use centra_core::graph::{CoGraph, Partition};
use centra_core::rank::RankedTable;
use centra_core::analyze_pairs;

/// Small label alphabet so random edge lists hit duplicates and self-loops.
fn edge_pairs() -> impl Strategy<Value = Vec<(String, String)>> {
    let label = prop::sample::select(vec!["a", "b", "c", "d", "e", "f", "g", "h"])
        .prop_map(str::to_string);
    prop::collection::vec((label.clone(), label), 1..40)
}

proptest! {
    #[test]
    fn cleaned_edges_have_no_loops_or_repeats(pairs in edge_pairs()) {
        let list = EdgeList::from_pairs(pairs).expect("labels are non-empty");
        let mut seen = HashSet::new();
        for edge in list.edges() {
            prop_assert_ne!(&edge.source, &edge.target);
            prop_assert!(seen.insert(edge.key()), "repeated pair {:?}", edge.key());
        }
    }

    #[test]
    fn components_partition_nodes_and_edges(pairs in edge_pairs()) {
        let list = EdgeList::from_pairs(pairs).expect("labels are non-empty");
        prop_assume!(!list.is_empty());
        let g = CoGraph::from_edges(&list).expect("non-empty");
        let p = Partition::of(&g);

        let mut nodes = HashSet::new();
        let mut edge_total = 0;
        for comp in &p.components {
            for global in &comp.global {
                prop_assert!(nodes.insert(*global), "node in two components");
            }
            edge_total += comp.edge_count();
        }
        prop_assert_eq!(nodes.len(), g.node_count());
        prop_assert_eq!(edge_total, g.edge_count());
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn degree_centrality_is_degree_over_n_minus_one(pairs in edge_pairs()) {
        let run = match analyze_pairs(pairs, &Config::default()) {
            Ok(run) => run,
            Err(_) => return Ok(()),
        };
        for comp in &run.partition.components {
            let n = comp.node_count();
            for &global in &comp.global {
                let label = &run.graph.graph[global];
                let expected = run.graph.degree(global) as f64 / (n - 1) as f64;
                let actual = run.centrality.degree.get(label).expect("scored");
                prop_assert!((actual - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn ranked_tables_are_non_increasing(pairs in edge_pairs()) {
        let run = match analyze_pairs(pairs, &Config::default()) {
            Ok(run) => run,
            Err(_) => return Ok(()),
        };
        for scores in run.centrality.iter() {
            let table = RankedTable::from_scores(scores);
            prop_assert_eq!(table.len(), run.graph.node_count());
            for w in table.rows.windows(2) {
                prop_assert!(w[0].score >= w[1].score);
            }
        }
    }

    #[test]
    fn betweenness_stays_in_unit_interval(pairs in edge_pairs()) {
        let run = match analyze_pairs(pairs, &Config::default()) {
            Ok(run) => run,
            Err(_) => return Ok(()),
        };
        for (_, score) in run.centrality.betweenness.iter() {
            prop_assert!((-1e-12..=1.0 + 1e-12).contains(&score), "{}", score);
        }
    }
}
