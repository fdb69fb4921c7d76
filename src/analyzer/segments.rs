use std::collections::HashMap;

use crate::analyzer::price_analysis::summarize;
use crate::model::{Listing, SummaryStats};

/// Rating summaries for superhosts vs. everyone else. The totals count all
/// listings in each half; the summaries cover only the rated ones.
#[derive(Debug)]
pub struct SuperhostSplit {
    pub superhost_total: usize,
    pub regular_total: usize,
    pub superhost_ratings: Option<SummaryStats>,
    pub regular_ratings: Option<SummaryStats>,
}

/// Listings per category label, sorted by count descending (ties fall back
/// to the label so output is deterministic).
pub fn count_by<F>(listings: &[Listing], key: F) -> Vec<(String, usize)>
where
    F: Fn(&Listing) -> &str,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for listing in listings {
        *counts.entry(key(listing).to_string()).or_default() += 1;
    }
    let mut out: Vec<(String, usize)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

pub fn count_by_borough(listings: &[Listing]) -> Vec<(String, usize)> {
    count_by(listings, |l| &l.borough)
}

pub fn count_by_room_type(listings: &[Listing]) -> Vec<(String, usize)> {
    count_by(listings, |l| &l.room_type)
}

/// Median nightly price per borough, priciest first.
pub fn median_price_by_borough(listings: &[Listing]) -> Vec<(String, f64)> {
    let mut groups: HashMap<String, Vec<f64>> = HashMap::new();
    for listing in listings {
        groups
            .entry(listing.borough.clone())
            .or_default()
            .push(listing.price);
    }
    let mut out: Vec<(String, f64)> = groups
        .into_iter()
        .filter_map(|(borough, prices)| summarize(&prices).map(|s| (borough, s.median)))
        .collect();
    out.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    out
}

/// Splits the dataset on the superhost flag and summarizes review scores
/// for each half.
pub fn rating_split_by_superhost(listings: &[Listing]) -> SuperhostSplit {
    let mut superhost_total = 0usize;
    let mut regular_total = 0usize;
    let mut superhost_ratings = Vec::new();
    let mut regular_ratings = Vec::new();

    for listing in listings {
        if listing.superhost {
            superhost_total += 1;
            if let Some(r) = listing.rating {
                superhost_ratings.push(r);
            }
        } else {
            regular_total += 1;
            if let Some(r) = listing.rating {
                regular_ratings.push(r);
            }
        }
    }

    SuperhostSplit {
        superhost_total,
        regular_total,
        superhost_ratings: summarize(&superhost_ratings),
        regular_ratings: summarize(&regular_ratings),
    }
}
