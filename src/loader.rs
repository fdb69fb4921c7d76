//! CSV ingest for listings dumps.
//!
//! Schema errors (a required column missing entirely) are fatal; broken
//! individual rows are skipped and reported with their line numbers so a
//! dirty export never aborts a run.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::model::{LoaderError, RawListing};

/// Columns the analysis cannot run without. Everything else is optional.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "price",
    "neighbourhood_group",
    "room_type",
    "review_scores_rating",
    "host_is_superhost",
];

/// A row skipped during ingest, with its 1-based CSV line number.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Ingest output: parsed rows plus per-row failures.
#[derive(Debug)]
pub struct LoadOutcome {
    pub rows: Vec<RawListing>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

pub fn load_listings(path: &Path) -> Result<LoadOutcome, LoaderError> {
    let file = File::open(path)
        .map_err(|e| LoaderError::Open(path.display().to_string(), e))?;
    from_reader(file)
}

/// Core ingest, generic over the byte source so tests can feed CSV text.
pub fn from_reader<R: Read>(input: R) -> Result<LoadOutcome, LoaderError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let cleaned: Vec<String> = headers.iter().map(normalize_header).collect();

    for required in REQUIRED_COLUMNS {
        if !cleaned.iter().any(|h| h == required) {
            return Err(LoaderError::MissingColumn(required.to_string()));
        }
    }

    // Hand serde the cleaned names so a BOM or odd casing in the file
    // cannot break field matching.
    reader.set_headers(StringRecord::from(cleaned));

    let mut rows = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for result in reader.deserialize::<RawListing>() {
        rows_read += 1;
        match result {
            Ok(row) => rows.push(row),
            Err(e) => {
                // The error position carries the record's own 1-based line,
                // which stays exact when a quoted field spans several lines.
                let line = e.position().map_or(0, |p| p.line() as usize);
                row_errors.push(RowError {
                    line,
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(LoadOutcome {
        rows,
        row_errors,
        rows_read,
    })
}

/// Excel likes to prefix the first header of a UTF-8 CSV with a BOM; strip
/// it (and normalize case) before schema validation.
fn normalize_header(name: &str) -> String {
    name.trim().trim_start_matches('\u{feff}').to_ascii_lowercase()
}
