// Core structs: RawListing, Listing, SummaryStats, NormalizeReport
use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

/// One row of the listings CSV as it appears on disk. The `price` field is
/// still currency-formatted text (`"$1,200.00"`); normalization turns a
/// `RawListing` into a [`Listing`].
///
/// Columns beyond the ones named here are ignored by the reader. The
/// defaulted fields tolerate dumps that omit the column entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct RawListing {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub neighbourhood_group: String,
    pub room_type: String,
    pub price: String,
    pub review_scores_rating: Option<f64>,
    #[serde(default)]
    pub number_of_reviews: Option<u32>,
    #[serde(default)]
    pub host_is_superhost: String,
    #[serde(default)]
    pub last_review: Option<NaiveDate>,
}

/// An analysis-ready listing. Invariant: `price` is finite and > 0.
#[derive(Debug, Clone)]
pub struct Listing {
    pub id: u64,
    pub name: String,
    pub borough: String,
    pub room_type: String,
    pub price: f64,
    pub rating: Option<f64>,
    pub reviews: u32,
    pub superhost: bool,
    pub last_review: Option<NaiveDate>,
}

/// Descriptive statistics for a series of values (prices, ratings).
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub max: f64,
}

/// What price normalization did to the dataset. Dropping rows is policy,
/// not an error, but the counts are surfaced so a run never hides how much
/// of the file it ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeReport {
    pub rows_in: usize,
    pub kept: usize,
    pub dropped_unparseable: usize,
    pub dropped_nonpositive: usize,
}

impl NormalizeReport {
    pub fn dropped(&self) -> usize {
        self.dropped_unparseable + self.dropped_nonpositive
    }
}

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("cannot open dataset '{0}': {1}")]
    Open(String, #[source] std::io::Error),
    #[error("cannot read CSV headers: {0}")]
    Headers(#[from] csv::Error),
    #[error("missing required column `{0}`")]
    MissingColumn(String),
}
