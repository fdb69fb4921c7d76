use std::path::Path;
use std::process::ExitCode;

use tracing::{error, info, warn};

use bnb_lens::config::{AppConfig, load_config};
use bnb_lens::loader::load_listings;
use bnb_lens::normalizer::normalize_all;
use bnb_lens::report;

const CONFIG_PATH: &str = "bnb-lens.json";

fn main() -> ExitCode {
    // Initialize logging; stderr, so the report stream stays clean
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    // Load configuration from file; a missing file means defaults, a broken one is fatal
    let config: AppConfig = if Path::new(CONFIG_PATH).exists() {
        match load_config(CONFIG_PATH) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Config load error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        info!("No {} found, using defaults", CONFIG_PATH);
        AppConfig::default()
    };

    if config.price_axis_cap <= 0.0 {
        error!(
            "price_axis_cap must be positive, got {}",
            config.price_axis_cap
        );
        return ExitCode::FAILURE;
    }

    info!("🚀 BnbLens started!");

    info!("Loading listings from {}...", config.dataset_path);
    let outcome = match load_listings(Path::new(&config.dataset_path)) {
        Ok(o) => o,
        Err(e) => {
            error!("Load error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Read {} data rows", outcome.rows_read);

    if !outcome.row_errors.is_empty() {
        warn!("{} rows failed to parse", outcome.row_errors.len());
        for row_error in outcome.row_errors.iter().take(5) {
            warn!("  line {}: {}", row_error.line, row_error.message);
        }
        if outcome.row_errors.len() > 5 {
            warn!("  ...and {} more", outcome.row_errors.len() - 5);
        }
    }

    info!("Normalizing prices...");
    let (listings, cleaning) = normalize_all(outcome.rows);
    if cleaning.dropped() > 0 {
        warn!(
            "Dropped {} rows ({} unparseable, {} non-positive)",
            cleaning.dropped(),
            cleaning.dropped_unparseable,
            cleaning.dropped_nonpositive
        );
    } else {
        info!("All {} rows kept", cleaning.kept);
    }

    if listings.is_empty() {
        error!("No usable listings after cleaning, nothing to analyze");
        return ExitCode::FAILURE;
    }

    report::print_report(&listings, &cleaning, &config);
    ExitCode::SUCCESS
}
