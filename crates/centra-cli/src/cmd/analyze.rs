//! `centra analyze` — centrality report for an edge file.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use centra_core::analyze_file;
use centra_core::config::{Config, resolve_config};
use centra_core::rank::RankedTable;
use centra_core::report::NetworkReport;
use clap::Args;
use clap::builder::RangedU64ValueParser;
use serde::Serialize;
use tracing::debug;

use crate::chart;
use crate::output::{OutputMode, pretty_rule, pretty_section, render};

/// Arguments for `centra analyze`.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Two-column comma-separated edge file, no header.
    pub file: PathBuf,

    /// Rows per ranked table [default: 5].
    #[arg(long, value_name = "K")]
    pub top: Option<usize>,

    /// Seed for betweenness source sampling [default: 42].
    #[arg(long)]
    pub seed: Option<u64>,

    /// Betweenness sources per component, at least 1 [default: 100].
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub sample_size: Option<usize>,

    /// Power iteration budget for eigenvector centrality [default: 100].
    #[arg(long)]
    pub max_iter: Option<usize>,

    /// Per-node convergence tolerance for eigenvector centrality [default: 1e-6].
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Skip the bar chart figure.
    #[arg(long)]
    pub no_chart: bool,

    /// Config file to use instead of ./centra.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl AnalyzeArgs {
    /// Apply flag overrides on top of a resolved config.
    fn apply(&self, mut config: Config) -> Config {
        if let Some(top) = self.top {
            config.report.top_k = top;
        }
        if let Some(seed) = self.seed {
            config.centrality.seed = seed;
        }
        if let Some(sample_size) = self.sample_size {
            config.centrality.sample_size = sample_size;
        }
        if let Some(max_iter) = self.max_iter {
            config.centrality.max_iter = max_iter;
        }
        if let Some(tolerance) = self.tolerance {
            config.centrality.tolerance = tolerance;
        }
        config
    }
}

/// JSON payload for `centra analyze`.
#[derive(Debug, Serialize)]
struct AnalyzeOutput<'a> {
    file: &'a Path,
    self_loops_removed: usize,
    duplicates_removed: usize,
    #[serde(flatten)]
    report: &'a NetworkReport,
}

/// Execute `centra analyze`.
pub fn run_analyze(
    args: &AnalyzeArgs,
    output: OutputMode,
    project_root: &Path,
) -> anyhow::Result<()> {
    let config = args.apply(resolve_config(project_root, args.config.as_deref())?);
    debug!(?config, "effective config");

    let analysis = analyze_file(&args.file, &config)?;
    let payload = AnalyzeOutput {
        file: &args.file,
        self_loops_removed: analysis.edges.self_loops_removed(),
        duplicates_removed: analysis.edges.duplicates_removed(),
        report: &analysis.report,
    };

    let show_chart = output.is_pretty() && !args.no_chart;
    render(output, &payload, |payload, w| {
        if output.is_pretty() {
            render_pretty(payload.report, w)?;
        } else {
            render_text(payload.report, w)?;
        }
        if show_chart {
            writeln!(w)?;
            let figure = chart::render_figure(&payload.report.rankings, chart::figure_width());
            write!(w, "{figure}")?;
        }
        Ok(())
    })
    .context("failed to write report")
}

fn render_pretty(report: &NetworkReport, w: &mut dyn Write) -> io::Result<()> {
    for table in &report.rankings {
        pretty_section(w, &format!("Top {} nodes by {}", table.len(), table.metric))?;
        write_rows(table, w)?;
        writeln!(w)?;
    }
    pretty_rule(w)?;
    write_summary(report, w)
}

fn render_text(report: &NetworkReport, w: &mut dyn Write) -> io::Result<()> {
    for table in &report.rankings {
        writeln!(w, "{}", table.metric)?;
        for row in &table.rows {
            writeln!(w, "{}\t{:.6}", row.node, row.score)?;
        }
    }
    write_summary(report, w)
}

fn write_rows(table: &RankedTable, w: &mut dyn Write) -> io::Result<()> {
    let width = table
        .rows
        .iter()
        .map(|r| r.node.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);
    writeln!(w, "{:>4}  {:<width$}  {:>10}", "#", "Node", "Score")?;
    for (i, row) in table.rows.iter().enumerate() {
        writeln!(w, "{:>4}  {:<width$}  {:>10.6}", i + 1, row.node, row.score)?;
    }
    Ok(())
}

fn write_summary(report: &NetworkReport, w: &mut dyn Write) -> io::Result<()> {
    if let Some(ref min) = report.min_degree {
        writeln!(
            w,
            "Node with the fewest connections: {} with {} connections",
            min.node, min.degree
        )?;
    }
    writeln!(w, "Number of connections in the network: {}", report.edge_count)
}
