use std::collections::HashMap;

/// A half-open dollar bucket `[lo, hi)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriceRange(pub u64, pub u64);

/// Fixed-width price distribution over `[0, cap)` plus an overflow count
/// for everything at or above the cap. The classic chart clips its axis at
/// $500 and lets the luxury tail fall off the plot; the overflow count
/// keeps that tail visible in a terminal.
#[derive(Debug, Clone)]
pub struct Histogram {
    pub bins: Vec<(PriceRange, usize)>,
    pub overflow: usize,
}

impl Histogram {
    /// Total observations, bins plus overflow.
    pub fn total(&self) -> usize {
        self.bins.iter().map(|(_, c)| c).sum::<usize>() + self.overflow
    }

    pub fn max_bin_count(&self) -> usize {
        self.bins.iter().map(|(_, c)| *c).max().unwrap_or(0)
    }
}

/// Bins prices into `bin_count` equal dollar steps from zero to `cap`.
/// Prices are > 0 by the normalization invariant, so no underflow bucket
/// exists.
pub fn price_histogram(prices: &[f64], cap: f64, bin_count: usize) -> Histogram {
    let bin_count = bin_count.max(1);
    // edge math saturates; an oversized cap distorts labels, nothing panics
    let step = ((cap / bin_count as f64).round() as u64).max(1);

    let mut counts: HashMap<usize, usize> = HashMap::new();
    let mut overflow = 0usize;
    for &price in prices {
        let idx = (price / step as f64).floor() as usize;
        if idx < bin_count {
            *counts.entry(idx).or_default() += 1;
        } else {
            overflow += 1;
        }
    }

    let bins = (0..bin_count)
        .map(|i| {
            let lo = (i as u64).saturating_mul(step);
            let hi = lo.saturating_add(step);
            (PriceRange(lo, hi), counts.get(&i).copied().unwrap_or(0))
        })
        .collect();

    Histogram { bins, overflow }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_cover_zero_to_cap_in_equal_steps() {
        let hist = price_histogram(&[5.0, 15.0, 499.0], 500.0, 50);
        assert_eq!(hist.bins.len(), 50);
        assert_eq!(hist.bins[0].0, PriceRange(0, 10));
        assert_eq!(hist.bins[49].0, PriceRange(490, 500));
        assert_eq!(hist.bins[0].1, 1);
        assert_eq!(hist.bins[1].1, 1);
        assert_eq!(hist.bins[49].1, 1);
        assert_eq!(hist.overflow, 0);
    }

    #[test]
    fn cap_boundary_lands_in_overflow() {
        let hist = price_histogram(&[500.0, 750.0, 10_000.0], 500.0, 50);
        assert_eq!(hist.overflow, 3);
        assert_eq!(hist.max_bin_count(), 0);
    }

    #[test]
    fn totals_add_up() {
        let prices: Vec<f64> = (1..=100).map(|i| i as f64 * 7.0).collect();
        let hist = price_histogram(&prices, 500.0, 50);
        assert_eq!(hist.total(), prices.len());
    }

    #[test]
    fn degenerate_bin_count_is_clamped() {
        let hist = price_histogram(&[10.0], 500.0, 0);
        assert_eq!(hist.bins.len(), 1);
        assert_eq!(hist.total(), 1);
    }

    #[test]
    fn survives_an_enormous_axis_cap() {
        let hist = price_histogram(&[100.0], 5_000_000_000.0, 50);
        assert_eq!(hist.bins.len(), 50);
        assert_eq!(hist.bins[0].0, PriceRange(0, 100_000_000));
        assert_eq!(hist.bins[0].1, 1);
        assert_eq!(hist.bins[49].0, PriceRange(4_900_000_000, 5_000_000_000));
        assert_eq!(hist.overflow, 0);
    }
}
