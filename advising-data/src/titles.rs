//! Build a [`TitleMap`] from registrar CSV exports.

use std::path::PathBuf;

use advising_catalog::normalize::MIN_CODE_LEN;
use advising_catalog::{TitleMap, format_code};

use crate::csv_rows::read_rows;
use crate::error::DataError;

/// Collect `canonical code -> title` from rows of `code, _, title, ...`.
///
/// Rows with fewer than three fields, an empty code or title, or a code too
/// short to be real are ignored. A later row for the same code replaces an
/// earlier one.
pub fn build_title_map<S: AsRef<str>>(rows: &[Vec<S>]) -> TitleMap {
    let mut titles = TitleMap::new();
    for row in rows {
        if row.len() < 3 {
            continue;
        }
        let code = row[0].as_ref().trim();
        let title = row[2].as_ref().trim();
        if code.is_empty() || title.is_empty() || code.len() < MIN_CODE_LEN {
            continue;
        }
        titles.insert(format_code(code), title);
    }
    titles
}

/// Read every file in order and build one title map from all of them.
pub fn load_title_map(paths: &[PathBuf]) -> Result<TitleMap, DataError> {
    let mut rows = Vec::new();
    for path in paths {
        let file_rows = read_rows(path)?;
        log::debug!("{}: {} row(s)", path.display(), file_rows.len());
        rows.extend(file_rows);
    }
    Ok(build_title_map(&rows))
}
