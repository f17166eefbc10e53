//! Edge loading from two-column tabular input.
//!
//! # Input format
//!
//! One edge per line, two comma-separated labels, no header:
//!
//! ```text
//! "LITTLE, ABNER","PRINCESS ZANDA"
//! CAPTAIN AMERICA,IRON MAN
//! ```
//!
//! Fields may be double-quoted; quoted fields may contain commas, and `""`
//! inside quotes is a literal quote. Unquoted fields are trimmed. Blank lines
//! are skipped.
//!
//! # Cleaning
//!
//! [`EdgeList::from_pairs`] drops self-loops and repeated unordered pairs,
//! keeping the first occurrence of each pair, and gives every edge weight 1.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::error::{AnalysisError, Result};

/// Weight given to every co-occurrence edge.
pub const UNIT_WEIGHT: f64 = 1.0;

/// An undirected, weighted co-occurrence edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

impl Edge {
    /// The pair in canonical (sorted) order, used as a dedup key.
    #[must_use]
    pub fn key(&self) -> (&str, &str) {
        unordered_key(&self.source, &self.target)
    }
}

/// A cleaned edge list: no self-loops, no repeated unordered pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeList {
    edges: Vec<Edge>,
    self_loops_removed: usize,
    duplicates_removed: usize,
}

impl EdgeList {
    /// Clean raw `(source, target)` pairs into an [`EdgeList`].
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::MalformedInput`] if a label is empty. The
    /// reported line is the 1-based position of the pair.
    #[instrument(skip(pairs))]
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut edges = Vec::new();
        let mut self_loops_removed = 0;
        let mut duplicates_removed = 0;

        for (i, (source, target)) in pairs.into_iter().enumerate() {
            let source: String = source.into();
            let target: String = target.into();

            if source.is_empty() || target.is_empty() {
                return Err(AnalysisError::MalformedInput {
                    line: i + 1,
                    reason: "empty node label".to_string(),
                });
            }

            if source == target {
                self_loops_removed += 1;
                continue;
            }

            let (a, b) = unordered_key(&source, &target);
            if !seen.insert((a.to_string(), b.to_string())) {
                duplicates_removed += 1;
                continue;
            }

            edges.push(Edge {
                source,
                target,
                weight: UNIT_WEIGHT,
            });
        }

        if self_loops_removed > 0 {
            info!(count = self_loops_removed, "removing self-loops");
        }
        debug!(
            kept = edges.len(),
            duplicates = duplicates_removed,
            "edge list cleaned"
        );

        Ok(Self {
            edges,
            self_loops_removed,
            duplicates_removed,
        })
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of `(a, a)` rows dropped.
    #[must_use]
    pub const fn self_loops_removed(&self) -> usize {
        self.self_loops_removed
    }

    /// Number of rows dropped because their unordered pair was already seen.
    #[must_use]
    pub const fn duplicates_removed(&self) -> usize {
        self.duplicates_removed
    }
}

/// Read an edge file from disk.
///
/// # Errors
///
/// Returns [`AnalysisError::Io`] if the file cannot be opened or read, and
/// [`AnalysisError::MalformedInput`] for rows that are not two labels.
#[instrument]
pub fn load_edges(path: &Path) -> Result<Vec<(String, String)>> {
    let file = File::open(path).map_err(|source| AnalysisError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let pairs = parse_edges(BufReader::new(file)).map_err(|e| match e {
        AnalysisError::Io { source, .. } => AnalysisError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    info!(rows = pairs.len(), "loaded edge rows");
    Ok(pairs)
}

/// Parse two-column rows from any buffered reader.
///
/// # Errors
///
/// Returns [`AnalysisError::MalformedInput`] for a row that does not hold
/// exactly two fields, has an empty field, or leaves a quote open.
pub fn parse_edges<R: BufRead>(reader: R) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line.map_err(|source| AnalysisError::Io {
            path: "<input>".into(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_row(&line).map_err(|reason| AnalysisError::MalformedInput {
            line: line_no,
            reason,
        })?;

        let [source, target]: [String; 2] =
            fields
                .try_into()
                .map_err(|fields: Vec<String>| AnalysisError::MalformedInput {
                    line: line_no,
                    reason: format!("expected 2 fields, found {}", fields.len()),
                })?;

        if source.is_empty() || target.is_empty() {
            return Err(AnalysisError::MalformedInput {
                line: line_no,
                reason: "empty node label".to_string(),
            });
        }

        pairs.push((source, target));
    }

    Ok(pairs)
}

/// Split one row into fields, honouring double quotes.
fn split_row(line: &str) -> std::result::Result<Vec<String>, String> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        while chars.next_if(|c| *c == ' ' || *c == '\t').is_some() {}

        let field = if chars.next_if_eq(&'"').is_some() {
            let mut value = String::new();
            loop {
                match chars.next() {
                    Some('"') => {
                        if chars.next_if_eq(&'"').is_some() {
                            value.push('"');
                        } else {
                            break;
                        }
                    }
                    Some(c) => value.push(c),
                    None => return Err("unterminated quoted field".to_string()),
                }
            }
            while chars.next_if(|c| *c == ' ' || *c == '\t').is_some() {}
            match chars.peek() {
                None | Some(',') => {}
                Some(c) => return Err(format!("unexpected '{c}' after quoted field")),
            }
            value
        } else {
            let mut value = String::new();
            while let Some(c) = chars.next_if(|c| *c != ',') {
                value.push(c);
            }
            value.trim().to_string()
        };

        fields.push(field);

        if chars.next().is_none() {
            break;
        }
    }

    Ok(fields)
}

fn unordered_key<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b { (a, b) } else { (b, a) }
}
