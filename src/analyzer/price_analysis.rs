use crate::model::{Listing, SummaryStats};

/// Calculates descriptive statistics for a value series: count, mean,
/// population standard deviation and the five-number summary. `None` for an
/// empty series, so a fully-filtered dataset can never smuggle NaN into the
/// charts.
pub fn summarize(values: &[f64]) -> Option<SummaryStats> {
    if values.is_empty() {
        return None;
    }
    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let std_dev = (values
        .iter()
        .map(|v| (v - mean).powi(2))
        .sum::<f64>() / count as f64)
        .sqrt();

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Some(SummaryStats {
        count,
        mean,
        std_dev,
        min: sorted[0],
        p25: percentile(&sorted, 25.0),
        median: percentile(&sorted, 50.0),
        p75: percentile(&sorted, 75.0),
        max: sorted[count - 1],
    })
}

/// Nearest-rank percentile over an already-sorted slice.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let idx = (p / 100.0 * (sorted.len() - 1) as f64) as usize;
    sorted[idx.min(sorted.len() - 1)]
}

/// Calculates the Pearson correlation coefficient between two slices.
/// Returns None if slices have different lengths or are empty, or when
/// either side has zero variance.
pub fn correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.is_empty() {
        return None;
    }
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;
    let numerator: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(xi, yi)| (xi - mean_x) * (yi - mean_y))
        .sum();
    let denominator_x: f64 = x.iter().map(|xi| (xi - mean_x).powi(2)).sum();
    let denominator_y: f64 = y.iter().map(|yi| (yi - mean_y).powi(2)).sum();
    let denominator = (denominator_x * denominator_y).sqrt();
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}

/// Correlation between nightly price and review score. Listings without a
/// rating are excluded pairwise, like a dataframe `corr()` would.
pub fn price_rating_correlation(listings: &[Listing]) -> Option<f64> {
    let (prices, ratings): (Vec<f64>, Vec<f64>) = listings
        .iter()
        .filter_map(|l| l.rating.map(|r| (l.price, r)))
        .unzip();
    correlation(&prices, &ratings)
}
