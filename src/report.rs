//! Report assembly: turns the analyzer's numbers into the printed study.
//!
//! Sections are built as strings so tests can assert on them; only
//! `print_report` touches stdout.

use std::fmt::Write;

use chrono::Utc;

use crate::analyzer::{
    count_by_borough, count_by_room_type, median_price_by_borough, price_histogram,
    price_rating_correlation, rating_split_by_superhost, summarize,
};
use crate::charts;
use crate::config::AppConfig;
use crate::model::{Listing, NormalizeReport, SummaryStats};

fn heading(title: &str) -> String {
    format!("\n{title}\n{}\n", "=".repeat(title.len()))
}

pub fn header_section() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "NYC short-stay listings report");
    let _ = writeln!(out, "generated {}", Utc::now().format("%Y-%m-%d %H:%M UTC"));
    out
}

pub fn overview_section(listings: &[Listing], report: &NormalizeReport) -> String {
    let mut out = heading("Dataset");
    let _ = writeln!(out, "{:<18} {}", "rows in file", report.rows_in);
    let _ = writeln!(out, "{:<18} {}", "listings kept", listings.len());
    let boroughs = count_by_borough(listings);
    let rooms = count_by_room_type(listings);
    let _ = writeln!(out, "{:<18} {}", "boroughs", boroughs.len());
    let _ = writeln!(out, "{:<18} {}", "room types", rooms.len());
    let total_reviews: u64 = listings.iter().map(|l| u64::from(l.reviews)).sum();
    let _ = writeln!(out, "{:<18} {}", "reviews on record", total_reviews);
    let first = listings.iter().filter_map(|l| l.last_review).min();
    let last = listings.iter().filter_map(|l| l.last_review).max();
    if let (Some(first), Some(last)) = (first, last) {
        let _ = writeln!(out, "{:<18} {first} to {last}", "review activity");
    }
    out
}

pub fn cleaning_section(report: &NormalizeReport) -> String {
    let mut out = heading("Price cleaning");
    let _ = writeln!(out, "{:<22} {}", "rows read", report.rows_in);
    let _ = writeln!(out, "{:<22} {}", "kept", report.kept);
    let _ = writeln!(out, "{:<22} {}", "unparseable price", report.dropped_unparseable);
    let _ = writeln!(out, "{:<22} {}", "non-positive price", report.dropped_nonpositive);
    if report.dropped() == 0 {
        let _ = writeln!(out, "every row survived cleaning");
    }
    out
}

pub fn price_section(listings: &[Listing], config: &AppConfig) -> String {
    let mut out = heading("Price distribution ($/night)");
    let prices: Vec<f64> = listings.iter().map(|l| l.price).collect();
    match summarize(&prices) {
        Some(stats) => {
            out.push_str(&stats_rows(&stats));
            out.push('\n');
            let hist = price_histogram(&prices, config.price_axis_cap, config.histogram_bins);
            out.push_str(&charts::histogram_chart(&hist, config.chart_width));
        }
        None => {
            let _ = writeln!(out, "(no priced listings)");
        }
    }
    out
}

pub fn borough_section(listings: &[Listing], config: &AppConfig) -> String {
    let mut out = heading("Listings by borough");
    out.push_str(&charts::count_bars(&count_by_borough(listings), config.chart_width));
    out.push_str(&heading("Median price by borough"));
    out.push_str(&charts::dollar_bars(
        &median_price_by_borough(listings),
        config.chart_width,
    ));
    out
}

pub fn room_type_section(listings: &[Listing], config: &AppConfig) -> String {
    let mut out = heading("Room types");
    out.push_str(&charts::count_bars(&count_by_room_type(listings), config.chart_width));
    out
}

pub fn rating_section(listings: &[Listing], config: &AppConfig) -> String {
    let mut out = heading("Price vs review rating");
    let points: Vec<(f64, f64)> = listings
        .iter()
        .filter_map(|l| l.rating.map(|r| (l.price, r)))
        .filter(|(price, _)| *price <= config.price_axis_cap)
        .collect();
    out.push_str(&charts::scatter(
        &points,
        config.chart_width,
        config.scatter_height,
        config.price_axis_cap,
    ));
    let hidden = listings
        .iter()
        .filter(|l| l.rating.is_some() && l.price > config.price_axis_cap)
        .count();
    if hidden > 0 {
        let _ = writeln!(
            out,
            "({hidden} rated listings above ${:.0} not shown)",
            config.price_axis_cap
        );
    }
    match price_rating_correlation(listings) {
        Some(r) => {
            let _ = writeln!(out, "Correlation between Price & Rating: {r:.2}");
        }
        None => {
            let _ = writeln!(
                out,
                "Correlation between Price & Rating: n/a (not enough rated listings)"
            );
        }
    }
    out
}

pub fn superhost_section(listings: &[Listing]) -> String {
    let mut out = heading("Superhosts");
    let split = rating_split_by_superhost(listings);
    let _ = writeln!(
        out,
        "{} superhosts / {} regular listings",
        split.superhost_total, split.regular_total
    );
    out.push_str(&charts::split_table(&[
        ("superhost", split.superhost_ratings.as_ref()),
        ("regular", split.regular_ratings.as_ref()),
    ]));
    out
}

pub fn conclusions_section(listings: &[Listing]) -> String {
    let mut out = heading("Takeaways");
    if let Some((name, count)) = count_by_borough(listings).first() {
        let _ = writeln!(out, "- {name} carries the most listings ({count}).");
    }
    if let Some((name, median)) = median_price_by_borough(listings).first() {
        let _ = writeln!(out, "- {name} is the priciest borough (median ${median:.0}/night).");
    }
    if let Some((name, count)) = count_by_room_type(listings).first() {
        let share = 100.0 * *count as f64 / listings.len() as f64;
        let _ = writeln!(out, "- {name} dominates the market ({share:.0}% of listings).");
    }
    match price_rating_correlation(listings) {
        Some(r) => {
            let _ = writeln!(
                out,
                "- Price and rating show a {} relationship (r = {r:.2}).",
                describe_correlation(r)
            );
        }
        None => {
            let _ = writeln!(out, "- Not enough rated listings to relate price and rating.");
        }
    }
    let split = rating_split_by_superhost(listings);
    if let (Some(s), Some(reg)) = (&split.superhost_ratings, &split.regular_ratings) {
        let _ = writeln!(
            out,
            "- Superhosts average {:.2} stars vs {:.2} for everyone else.",
            s.mean, reg.mean
        );
    }
    out
}

/// Prints every section of the study in notebook order.
pub fn print_report(listings: &[Listing], report: &NormalizeReport, config: &AppConfig) {
    print!("{}", header_section());
    print!("{}", overview_section(listings, report));
    print!("{}", cleaning_section(report));
    print!("{}", price_section(listings, config));
    print!("{}", borough_section(listings, config));
    print!("{}", room_type_section(listings, config));
    print!("{}", rating_section(listings, config));
    print!("{}", superhost_section(listings));
    print!("{}", conclusions_section(listings));
}

fn stats_rows(stats: &SummaryStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<8} {:>10}", "count", stats.count);
    let _ = writeln!(out, "{:<8} {:>10.2}", "mean", stats.mean);
    let _ = writeln!(out, "{:<8} {:>10.2}", "std", stats.std_dev);
    let _ = writeln!(out, "{:<8} {:>10.2}", "min", stats.min);
    let _ = writeln!(out, "{:<8} {:>10.2}", "p25", stats.p25);
    let _ = writeln!(out, "{:<8} {:>10.2}", "median", stats.median);
    let _ = writeln!(out, "{:<8} {:>10.2}", "p75", stats.p75);
    let _ = writeln!(out, "{:<8} {:>10.2}", "max", stats.max);
    out
}

fn describe_correlation(r: f64) -> String {
    let strength = if r.abs() < 0.3 {
        "weak"
    } else if r.abs() < 0.7 {
        "moderate"
    } else {
        "strong"
    };
    let direction = if r >= 0.0 { "positive" } else { "negative" };
    format!("{strength} {direction}")
}
