//! Side-by-side horizontal bar charts of the ranked tables.
//!
//! Widgets are rendered into an off-screen [`Buffer`] and flattened to plain
//! text, so the figure works on any stdout without entering raw mode.

use centra_core::rank::RankedTable;
use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Widget};

/// Bar values are scores scaled to integers at this resolution.
const SCALE: f64 = 10_000.0;

const DEFAULT_WIDTH: u16 = 120;
const MIN_WIDTH: u16 = 60;

/// Terminal width when stdout is a terminal, otherwise a fixed default.
pub fn figure_width() -> u16 {
    crossterm::terminal::size()
        .map_or(DEFAULT_WIDTH, |(cols, _)| cols)
        .max(MIN_WIDTH)
}

/// Render one bar chart per table, left to right, into a string.
pub fn render_figure(tables: &[RankedTable], width: u16) -> String {
    let rows = tables.iter().map(RankedTable::len).max().unwrap_or(0);
    let height = u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2);
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);

    if !tables.is_empty() {
        let count = u32::try_from(tables.len()).unwrap_or(u32::MAX);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(tables.iter().map(|_| Constraint::Ratio(1, count)))
            .split(area);

        for (table, column) in tables.iter().zip(columns.iter()) {
            chart(table).render(*column, &mut buf);
        }
    }

    flatten(&buf)
}

fn chart(table: &RankedTable) -> BarChart<'static> {
    let bars: Vec<Bar<'static>> = table
        .rows
        .iter()
        .map(|row| {
            Bar::default()
                .value(scaled(row.score))
                .label(Line::from(row.node.clone()))
                .text_value(format!("{:.4}", row.score))
        })
        .collect();

    BarChart::default()
        .block(Block::bordered().title(table.metric.title()))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(Color::Cyan))
        .data(BarGroup::default().bars(&bars))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled(score: f64) -> u64 {
    if score.is_finite() && score > 0.0 {
        (score * SCALE).round() as u64
    } else {
        0
    }
}

fn flatten(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buf.cell((x, y)).map_or(" ", Cell::symbol));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use centra_core::metrics::Metric;
    use centra_core::rank::RankedRow;

    fn table(metric: Metric, rows: &[(&str, f64)]) -> RankedTable {
        RankedTable {
            metric,
            rows: rows
                .iter()
                .map(|(node, score)| RankedRow {
                    node: (*node).to_string(),
                    score: *score,
                })
                .collect(),
        }
    }

    #[test]
    fn figure_has_one_line_per_row_plus_borders() {
        let tables = [
            table(Metric::Betweenness, &[("A", 0.5), ("B", 0.25)]),
            table(Metric::Eigenvector, &[("A", 0.7)]),
            table(Metric::Degree, &[("A", 1.0), ("B", 0.5)]),
        ];
        let figure = render_figure(&tables, 120);
        assert_eq!(figure.lines().count(), 4);
    }

    #[test]
    fn figure_shows_titles_and_labels() {
        let tables = [
            table(Metric::Betweenness, &[("HUB", 0.9)]),
            table(Metric::Eigenvector, &[("HUB", 0.6)]),
            table(Metric::Degree, &[("HUB", 1.0)]),
        ];
        let figure = render_figure(&tables, 120);
        assert!(figure.contains("Betweenness"));
        assert!(figure.contains("Eigenvector"));
        assert!(figure.contains("Degree"));
        assert!(figure.contains("HUB"));
    }

    #[test]
    fn empty_figure_is_just_a_frame() {
        let figure = render_figure(&[], 80);
        assert_eq!(figure.lines().count(), 2);
        assert!(figure.trim().is_empty());
    }

    #[test]
    fn scaled_clamps_negative_and_nan() {
        assert_eq!(scaled(-0.1), 0);
        assert_eq!(scaled(f64::NAN), 0);
        assert_eq!(scaled(0.5), 5_000);
    }
}
