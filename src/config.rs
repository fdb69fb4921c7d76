use serde::Deserialize;
use std::fs;

/// Runtime knobs for the analysis. Every field has a default that mirrors
/// the classic notebook treatment of this dataset (50 price bins, $500
/// axis cap, `listings.csv` in the working directory), so the tool runs
/// with no config file at all.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,
    /// Upper bound of the price axis for the histogram and the scatter
    /// chart. Prices above it are counted as overflow, not hidden.
    #[serde(default = "default_price_axis_cap")]
    pub price_axis_cap: f64,
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,
    /// Width of chart bars / scatter grid, in terminal columns.
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
    #[serde(default = "default_scatter_height")]
    pub scatter_height: usize,
}

fn default_dataset_path() -> String {
    "listings.csv".to_string()
}

fn default_price_axis_cap() -> f64 {
    500.0
}

fn default_histogram_bins() -> usize {
    50
}

fn default_chart_width() -> usize {
    60
}

fn default_scatter_height() -> usize {
    16
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            price_axis_cap: default_price_axis_cap(),
            histogram_bins: default_histogram_bins(),
            chart_width: default_chart_width(),
            scatter_height: default_scatter_height(),
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
