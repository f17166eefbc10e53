//! Ranked tables over centrality scores.
//!
//! Rows are sorted by score descending with a stable sort, so ties keep the
//! graph's node order (first appearance in the input).

use serde::Serialize;

use crate::metrics::{CentralityScores, Metric};

/// One `(node, score)` row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRow {
    pub node: String,
    pub score: f64,
}

/// Rows of one metric ordered by score, highest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTable {
    pub metric: Metric,
    pub rows: Vec<RankedRow>,
}

impl RankedTable {
    /// Rank every node of `scores`.
    #[must_use]
    pub fn from_scores(scores: &CentralityScores) -> Self {
        let mut rows: Vec<RankedRow> = scores
            .iter()
            .map(|(node, score)| RankedRow {
                node: node.to_string(),
                score,
            })
            .collect();
        // `sort_by` is stable: equal scores keep node order.
        rows.sort_by(|a, b| b.score.total_cmp(&a.score));
        Self {
            metric: scores.metric,
            rows,
        }
    }

    /// Keep only the first `k` rows.
    #[must_use]
    pub fn top(mut self, k: usize) -> Self {
        self.rows.truncate(k);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
