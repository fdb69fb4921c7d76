//! Terminal chart rendering.
//!
//! Every renderer returns a `String` and is pure; the report decides where
//! output goes. Bars scale linearly from zero so category proportions stay
//! honest.

use std::fmt::Write;

use crate::analyzer::{Histogram, PriceRange};
use crate::model::SummaryStats;

/// Density ramp for scatter cells; empty cells stay blank.
const DENSITY_RAMP: [char; 5] = ['·', '░', '▒', '▓', '█'];

/// Horizontal bar chart for category counts.
pub fn count_bars(rows: &[(String, usize)], width: usize) -> String {
    let rows: Vec<(String, f64, String)> = rows
        .iter()
        .map(|(label, count)| (label.clone(), *count as f64, count.to_string()))
        .collect();
    render_bars(&rows, width)
}

/// Horizontal bar chart for dollar amounts (e.g. median price per borough).
pub fn dollar_bars(rows: &[(String, f64)], width: usize) -> String {
    let rows: Vec<(String, f64, String)> = rows
        .iter()
        .map(|(label, value)| (label.clone(), *value, format!("${value:.0}")))
        .collect();
    render_bars(&rows, width)
}

fn render_bars(rows: &[(String, f64, String)], width: usize) -> String {
    let mut out = String::new();
    if rows.is_empty() {
        return out;
    }
    let max = rows.iter().map(|r| r.1).fold(0.0_f64, f64::max);
    let label_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(0);

    for (label, value, shown) in rows {
        let bar_len = if max > 0.0 {
            ((value / max) * width as f64).round() as usize
        } else {
            0
        };
        let bar = "#".repeat(bar_len.min(width));
        let _ = writeln!(out, "{label:>label_width$} | {bar:<width$} {shown}");
    }
    out
}

/// Price distribution, one row per bin, plus an overflow row when listings
/// sit above the cap.
pub fn histogram_chart(hist: &Histogram, width: usize) -> String {
    let mut out = String::new();
    let max = hist.max_bin_count().max(1);

    for (PriceRange(lo, hi), count) in &hist.bins {
        let bar_len = (count * width) / max;
        let _ = writeln!(
            out,
            "{:>11} | {:<width$} {}",
            format!("${lo}-${hi}"),
            "#".repeat(bar_len.min(width)),
            count
        );
    }
    if hist.overflow > 0 {
        let cap = hist.bins.last().map(|(PriceRange(_, hi), _)| *hi).unwrap_or(0);
        let bar_len = (hist.overflow * width) / max;
        let _ = writeln!(
            out,
            "{:>11} | {:<width$} {}",
            format!("${cap}+"),
            "#".repeat(bar_len.min(width)),
            hist.overflow
        );
    }
    out
}

/// Price/rating density grid. `points` are `(price, rating)` pairs already
/// clipped to `x_max`; the y axis covers the observed rating range and the
/// cell shade tracks how many listings landed there.
pub fn scatter(points: &[(f64, f64)], width: usize, height: usize, x_max: f64) -> String {
    if points.is_empty() {
        return "(no rated listings to plot)\n".to_string();
    }
    let width = width.max(2);
    let height = height.max(2);

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(_, y) in points {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    let y_span = y_max - y_min;

    let mut cells = vec![vec![0usize; width]; height];
    for &(x, y) in points {
        let col = ((x / x_max) * (width - 1) as f64).round() as usize;
        let row_up = if y_span == 0.0 {
            height / 2
        } else {
            (((y - y_min) / y_span) * (height - 1) as f64).round() as usize
        };
        let row = height - 1 - row_up;
        cells[row][col.min(width - 1)] += 1;
    }
    let max_cell = cells.iter().flatten().copied().max().unwrap_or(0);

    let mut out = String::new();
    for (r, row) in cells.iter().enumerate() {
        let label = if r == 0 {
            format!("{y_max:>6.1}")
        } else if r == height - 1 {
            format!("{y_min:>6.1}")
        } else {
            " ".repeat(6)
        };
        let line: String = row.iter().map(|&c| density_char(c, max_cell)).collect();
        let _ = writeln!(out, "{label} |{line}|");
    }
    let _ = writeln!(out, "{} +{}+", " ".repeat(6), "-".repeat(width));
    let right = format!("${x_max:.0}");
    let _ = writeln!(
        out,
        "{}  $0{}{}",
        " ".repeat(6),
        " ".repeat(width.saturating_sub(2 + right.len())),
        right
    );
    out
}

fn density_char(count: usize, max: usize) -> char {
    if count == 0 {
        return ' ';
    }
    if max <= 1 {
        return DENSITY_RAMP[0];
    }
    let idx = ((count - 1) * (DENSITY_RAMP.len() - 1)) / (max - 1);
    DENSITY_RAMP[idx.min(DENSITY_RAMP.len() - 1)]
}

/// Side-by-side rating summaries: the boxplot's numbers, as a table.
pub fn split_table(rows: &[(&str, Option<&SummaryStats>)]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<14} {:>7} {:>7} {:>7} {:>7} {:>7} {:>7} {:>7}",
        "group", "rated", "mean", "min", "p25", "median", "p75", "max"
    );
    let _ = writeln!(out, "{:-<70}", "");
    for (label, stats) in rows {
        match stats {
            Some(s) => {
                let _ = writeln!(
                    out,
                    "{:<14} {:>7} {:>7.2} {:>7.2} {:>7.2} {:>7.2} {:>7.2} {:>7.2}",
                    label, s.count, s.mean, s.min, s.p25, s.median, s.p75, s.max
                );
            }
            None => {
                let _ = writeln!(out, "{label:<14} {:>7} (no rated listings)", 0);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::price_histogram;

    #[test]
    fn bars_are_proportional_and_fill_to_the_max() {
        let rows = vec![
            ("Manhattan".to_string(), 100usize),
            ("Brooklyn".to_string(), 50),
            ("Bronx".to_string(), 0),
        ];
        let chart = count_bars(&rows, 40);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].matches('#').count(), 40);
        assert_eq!(lines[1].matches('#').count(), 20);
        assert_eq!(lines[2].matches('#').count(), 0);
        assert!(lines[0].ends_with("100"));
    }

    #[test]
    fn labels_align_on_the_longest() {
        let rows = vec![
            ("Staten Island".to_string(), 3usize),
            ("Bronx".to_string(), 2),
        ];
        let chart = count_bars(&rows, 10);
        let lines: Vec<&str> = chart.lines().collect();
        let bar_start_0 = lines[0].find('|').unwrap();
        let bar_start_1 = lines[1].find('|').unwrap();
        assert_eq!(bar_start_0, bar_start_1);
    }

    #[test]
    fn histogram_chart_shows_every_bin_and_the_overflow() {
        let hist = price_histogram(&[10.0, 20.0, 30.0, 900.0], 500.0, 50);
        let chart = histogram_chart(&hist, 30);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 51);
        assert!(lines[0].trim_start().starts_with("$0-$10"));
        assert!(lines[50].trim_start().starts_with("$500+"));
        assert!(lines[50].ends_with('1'));
    }

    #[test]
    fn scatter_grid_has_requested_dimensions() {
        let points = vec![(100.0, 4.0), (200.0, 4.5), (450.0, 5.0), (20.0, 3.0)];
        let chart = scatter(&points, 30, 8, 500.0);
        let lines: Vec<&str> = chart.lines().collect();
        // 8 grid rows + axis + x labels
        assert_eq!(lines.len(), 10);
        for line in &lines[..8] {
            assert_eq!(line.chars().count(), 6 + 2 + 30 + 1);
        }
        assert!(lines[0].starts_with("   5.0"));
        assert!(lines[7].starts_with("   3.0"));
        assert!(lines[9].contains("$0"));
        assert!(lines[9].ends_with("$500"));
    }

    #[test]
    fn scatter_handles_a_flat_rating_series() {
        let points = vec![(100.0, 4.5), (200.0, 4.5)];
        let chart = scatter(&points, 20, 6, 500.0);
        assert!(chart.contains('·'));
    }

    #[test]
    fn scatter_without_points_degrades_gracefully() {
        assert_eq!(scatter(&[], 20, 6, 500.0), "(no rated listings to plot)\n");
    }

    #[test]
    fn density_ramp_starts_light_and_ends_dark() {
        assert_eq!(density_char(0, 9), ' ');
        assert_eq!(density_char(1, 9), '·');
        assert_eq!(density_char(9, 9), '█');
    }

    #[test]
    fn split_table_reports_both_groups() {
        let stats = SummaryStats {
            count: 3,
            mean: 4.5,
            std_dev: 0.2,
            min: 4.2,
            p25: 4.3,
            median: 4.5,
            p75: 4.7,
            max: 4.8,
        };
        let table = split_table(&[("superhost", Some(&stats)), ("regular", None)]);
        assert!(table.contains("superhost"));
        assert!(table.contains("4.50"));
        assert!(table.contains("(no rated listings)"));
    }
}
