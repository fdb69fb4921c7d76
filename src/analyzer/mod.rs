// Analyzer module: aggregates submodules for different aspects of analysis.

pub mod histogram;
pub mod price_analysis;
pub mod segments;

// Re-export the analysis entry points for ease of use.
pub use histogram::{Histogram, PriceRange, price_histogram};
pub use price_analysis::{correlation, price_rating_correlation, summarize};
pub use segments::{
    SuperhostSplit, count_by_borough, count_by_room_type, median_price_by_borough,
    rating_split_by_superhost,
};
