//! Drop courses by catalog-number level.

use crate::types::CourseRecord;

/// Split courses into `(kept, removed)` by catalog-number prefix.
///
/// A course is removed when the token after the first whitespace in its code
/// starts with `prefix` (e.g. `"50"` removes the 50000 level). Codes without
/// a space are always kept.
pub fn filter_by_level(
    records: Vec<CourseRecord>,
    prefix: &str,
) -> (Vec<CourseRecord>, Vec<CourseRecord>) {
    let (removed, kept): (Vec<_>, Vec<_>) = records.into_iter().partition(|r| {
        r.code
            .split_whitespace()
            .nth(1)
            .is_some_and(|number| number.starts_with(prefix))
    });
    (kept, removed)
}
