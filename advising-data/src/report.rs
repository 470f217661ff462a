//! Merge course titles into the registrar's courses report.
//!
//! The report has `Subject, Catalog Number, Description` columns. The merged
//! file gains a `Title` column after the catalog number:
//! ```text
//! Subject,Catalog Number,Title,Description
//! CRWT,10203,Intro to Creative Writing,Workshop in which ...
//! ```

use std::path::Path;

use advising_catalog::{TitleMap, format_code};

use crate::error::DataError;
use crate::util::{read_input, write_atomic};

/// How many report rows did and did not find a title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeCounts {
    pub with_title: usize,
    pub without_title: usize,
}

impl MergeCounts {
    pub fn total(&self) -> usize {
        self.with_title + self.without_title
    }
}

/// Read the report at `input`, add titles, and write the result to `output`.
///
/// `input` and `output` may be the same file.
pub fn merge_report_titles(
    input: &Path,
    output: &Path,
    titles: &TitleMap,
) -> Result<MergeCounts, DataError> {
    let content = read_input(input)?;
    let (rows, counts) = merge_rows(&content, titles).map_err(|e| DataError::csv(input, e))?;

    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in &rows {
        writer.write_record(row).map_err(|e| DataError::csv(output, e))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| DataError::io(output, e.into_error()))?;

    write_atomic(output, &bytes)?;
    Ok(counts)
}

fn merge_rows(content: &str, titles: &TitleMap) -> Result<(Vec<Vec<String>>, MergeCounts), csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    let mut counts = MergeCounts::default();

    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let get = |n: usize| record.get(n).unwrap_or("").trim().to_string();

        if i == 0 {
            rows.push(vec![get(0), get(1), "Title".to_string(), get(2)]);
            continue;
        }

        let subject = get(0);
        let catalog = get(1);
        let code = format_code(&format!("{subject}{catalog}"));

        let title = titles.get(&code).unwrap_or("").to_string();
        if title.is_empty() {
            counts.without_title += 1;
        } else {
            counts.with_title += 1;
        }

        rows.push(vec![subject, catalog, title, get(2)]);
    }

    Ok((rows, counts))
}
