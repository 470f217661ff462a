//! Registrar CSV exports.
//!
//! Every export starts with a header row, which is skipped. Rows may have any
//! number of columns; it is up to the caller to decide what is too short.

use std::path::Path;

use advising_catalog::{CourseRecord, NormalizeOptions, normalize_row};

use crate::error::DataError;
use crate::util::read_input;

/// Read all data rows from a CSV file.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>, DataError> {
    let contents = read_input(path)?;
    Ok(parse_rows(&contents))
}

/// Parse CSV content from a string, skipping the header row.
///
/// Records the CSV reader rejects are logged and skipped.
pub fn parse_rows(content: &str) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping malformed CSV row: {e}");
                continue;
            }
        };
        rows.push(record.iter().map(str::to_string).collect());
    }
    rows
}

/// Read a CSV export and normalize every usable row.
pub fn load_courses(path: &Path, options: &NormalizeOptions) -> Result<Vec<CourseRecord>, DataError> {
    let rows = read_rows(path)?;
    let total = rows.len();
    let courses: Vec<CourseRecord> = rows
        .iter()
        .filter_map(|row| normalize_row(row, options))
        .collect();
    log::debug!(
        "{}: {} of {} row(s) normalized",
        path.display(),
        courses.len(),
        total
    );
    Ok(courses)
}
