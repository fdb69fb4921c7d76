//! # BnbLens - Exploratory Analysis of NYC Short-Stay Listings
//!
//! This library walks a listings export through the same steps the original
//! study took, as one pipeline:
//!
//! - CSV ingest with header validation and per-row error capture
//! - Price normalization (currency text to numbers, bad rows dropped)
//! - Summary statistics, histograms and group breakdowns
//! - Terminal charts and the printed report

pub mod analyzer;
pub mod charts;
pub mod config;
pub mod loader;
pub mod model;
pub mod normalizer;
pub mod report;

pub use config::{AppConfig, load_config};
pub use loader::{LoadOutcome, load_listings};
pub use model::{Listing, NormalizeReport, RawListing, SummaryStats};
pub use normalizer::normalize_all;

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
id,name,neighbourhood_group,room_type,price,review_scores_rating,number_of_reviews,host_is_superhost,last_review
1,Cozy loft,Manhattan,Entire home/apt,$225.00,4.8,12,t,2024-03-01
2,Budget bed,Brooklyn,Private room,$75.00,4.1,40,f,2023-11-20
3,Broken row,Queens,Shared room,N/A,3.9,2,f,
4,Free stay,Bronx,Private room,$0,4.0,1,f,2024-01-02
5,Quiet room,Brooklyn,Private room,\"$1,150.00\",4.9,7,t,2024-05-14
";

    #[test]
    fn the_full_pipeline_agrees_with_hand_computed_numbers() {
        let outcome = loader::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(outcome.rows_read, 5);
        assert!(outcome.row_errors.is_empty());

        let (listings, cleaning) = normalize_all(outcome.rows);
        assert_eq!(cleaning.rows_in, 5);
        assert_eq!(cleaning.kept, 3);
        assert_eq!(cleaning.dropped_unparseable, 1);
        assert_eq!(cleaning.dropped_nonpositive, 1);

        let prices: Vec<f64> = listings.iter().map(|l| l.price).collect();
        assert_eq!(prices, vec![225.0, 75.0, 1150.0]);

        let boroughs = analyzer::count_by_borough(&listings);
        assert_eq!(boroughs[0], ("Brooklyn".to_string(), 2));

        let hist = analyzer::price_histogram(&prices, 500.0, 50);
        assert_eq!(hist.overflow, 1);

        let split = analyzer::rating_split_by_superhost(&listings);
        assert_eq!(split.superhost_total, 2);
        assert_eq!(split.regular_total, 1);

        let section = report::rating_section(&listings, &AppConfig::default());
        assert!(section.contains("Correlation between Price & Rating: 0.69"));
    }
}
