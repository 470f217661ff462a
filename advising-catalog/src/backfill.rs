//! Fill in missing course titles from a [`TitleMap`].

use crate::types::{CourseRecord, TitleMap};

/// Outcome of a [`backfill`] pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackfillReport {
    /// `(code, new title)` for every record that received a title.
    pub updated: Vec<(String, String)>,
    /// Codes that needed a title but had no entry in the map.
    pub still_missing: Vec<String>,
}

impl BackfillReport {
    pub fn updated_count(&self) -> usize {
        self.updated.len()
    }

    pub fn missing_count(&self) -> usize {
        self.still_missing.len()
    }

    pub fn is_unchanged(&self) -> bool {
        self.updated.is_empty()
    }
}

/// Replace empty or placeholder titles with the mapped title.
///
/// Records that already have a real title are never touched, so running the
/// same map twice changes nothing the second time.
pub fn backfill(records: &mut [CourseRecord], titles: &TitleMap) -> BackfillReport {
    let mut report = BackfillReport::default();

    for record in records.iter_mut().filter(|r| !r.has_title()) {
        match titles.get(&record.code) {
            Some(title) => {
                record.title = title.to_string();
                report.updated.push((record.code.clone(), record.title.clone()));
            }
            None => report.still_missing.push(record.code.clone()),
        }
    }

    report
}
