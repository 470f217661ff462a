//! Collapse course records that share a code.

use std::collections::HashMap;

use crate::types::CourseRecord;

/// Courses keyed by code, in first-seen order.
///
/// The first record inserted for a code is kept; later ones are discarded
/// without merging any of their fields.
#[derive(Debug, Clone, Default)]
pub struct CourseSet {
    records: Vec<CourseRecord>,
    index: HashMap<String, usize>,
    duplicates: usize,
}

impl CourseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record unless its code is already present.
    ///
    /// Returns `true` when the record was kept.
    pub fn insert(&mut self, record: CourseRecord) -> bool {
        if self.index.contains_key(&record.code) {
            self.duplicates += 1;
            return false;
        }
        self.index.insert(record.code.clone(), self.records.len());
        self.records.push(record);
        true
    }

    pub fn get(&self, code: &str) -> Option<&CourseRecord> {
        self.index.get(code).map(|&i| &self.records[i])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records discarded as duplicates so far.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CourseRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<CourseRecord> {
        self.records
    }
}

impl Extend<CourseRecord> for CourseSet {
    fn extend<I: IntoIterator<Item = CourseRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl IntoIterator for CourseSet {
    type Item = CourseRecord;
    type IntoIter = std::vec::IntoIter<CourseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Keep the first record for each code.
pub fn dedupe<I>(records: I) -> CourseSet
where
    I: IntoIterator<Item = CourseRecord>,
{
    let mut set = CourseSet::new();
    set.extend(records);
    set
}
