//! Turns raw CSV rows into [`CourseRecord`]s.
//!
//! Undergraduate and catalog exports share the same leading columns:
//! ```text
//! code, (unused), title, hours-or-description
//! ```
//! The fourth column means different things depending on the export, so the
//! caller picks a [`RowLayout`].

use std::collections::BTreeSet;
use std::ops::Range;

use crate::code::CourseCode;
use crate::types::{CourseRecord, DEFAULT_HOURS, Level, PLACEHOLDER_TITLE};

/// Shortest raw code that can hold a subject prefix and a catalog number.
pub const MIN_CODE_LEN: usize = 8;

/// Graduate-level catalog numbers dropped unless cross-listed.
pub const GRADUATE_RANGE: Range<u32> = 50000..60000;

/// Graduate courses undergraduates commonly take.
pub const DEFAULT_CROSS_LISTED: &[&str] = &["ENGL 50233"];

/// What the fourth CSV column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowLayout {
    /// Credit hours (undergraduate exports).
    #[default]
    HoursColumn,
    /// Course description; hours come from the catalog number (full catalog export).
    DescriptionColumn,
}

/// Settings for [`normalize_row`].
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    pub layout: RowLayout,
    /// Canonical codes kept despite falling in [`GRADUATE_RANGE`].
    pub cross_listed: BTreeSet<String>,
    /// Subject prefixes to keep. Empty keeps every subject.
    pub subjects: Vec<String>,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            layout: RowLayout::default(),
            cross_listed: DEFAULT_CROSS_LISTED.iter().map(|c| c.to_string()).collect(),
            subjects: Vec::new(),
        }
    }
}

impl NormalizeOptions {
    pub fn with_layout(mut self, layout: RowLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_cross_listed<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cross_listed = codes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subjects = subjects.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_cross_listed(&self, code: &str) -> bool {
        self.cross_listed.contains(code)
    }

    fn accepts_subject(&self, code: &str) -> bool {
        self.subjects.is_empty() || self.subjects.iter().any(|s| code.starts_with(s.as_str()))
    }
}

/// Normalize one CSV row, or return `None` when the row should be skipped.
///
/// Rows are skipped when they have fewer than three fields, when the code is
/// shorter than [`MIN_CODE_LEN`], when the subject is filtered out, or when
/// the course is graduate level and not cross-listed.
///
/// # Examples
///
/// ```
/// use advising_catalog::{Level, NormalizeOptions, normalize_row};
///
/// let row = ["ENGL30553", "", "19th Century American Novel", "3"];
/// let course = normalize_row(&row, &NormalizeOptions::default()).unwrap();
/// assert_eq!(course.code, "ENGL 30553");
/// assert_eq!(course.hours, 3);
/// assert_eq!(course.level, Some(Level::Upper));
/// ```
pub fn normalize_row<S: AsRef<str>>(
    fields: &[S],
    options: &NormalizeOptions,
) -> Option<CourseRecord> {
    if fields.len() < 3 {
        log::debug!("Skipping row with {} field(s)", fields.len());
        return None;
    }

    let raw_code = fields[0].as_ref().trim();
    if raw_code.len() < MIN_CODE_LEN {
        log::debug!("Skipping row with short course code {raw_code:?}");
        return None;
    }

    let parsed = CourseCode::parse(raw_code);
    let code = match &parsed {
        Some(c) => c.to_string(),
        None => raw_code.to_string(),
    };

    if !options.accepts_subject(&code) {
        return None;
    }

    let number = parsed.as_ref().and_then(CourseCode::numeric);
    if number.is_some_and(|n| GRADUATE_RANGE.contains(&n)) && !options.is_cross_listed(&code) {
        log::debug!("Dropping graduate course {code}");
        return None;
    }

    let title = match fields[2].as_ref().trim() {
        "" => PLACEHOLDER_TITLE.to_string(),
        t => t.to_string(),
    };

    let fourth: Option<&str> = fields.get(3).map(|f| f.as_ref());
    let (hours, description) = match options.layout {
        RowLayout::HoursColumn => (fourth.map_or(DEFAULT_HOURS, parse_hours), None),
        RowLayout::DescriptionColumn => (
            hours_from_catalog_number(raw_code),
            Some(fourth.unwrap_or("").to_string()),
        ),
    };

    Some(CourseRecord {
        code,
        title,
        hours,
        level: number.map(Level::from_number),
        description,
    })
}

/// Parse a credit-hours field.
///
/// Fractional values are truncated. Ranges such as `"1-6"` (variable credit)
/// and anything unparseable fall back to [`DEFAULT_HOURS`].
pub fn parse_hours(raw: &str) -> u32 {
    let raw = raw.trim();
    if raw.contains('-') {
        return DEFAULT_HOURS;
    }
    match raw.parse::<f64>() {
        Ok(h) if h.is_finite() && h >= 0.0 => h.trunc() as u32,
        _ => DEFAULT_HOURS,
    }
}

/// Hours encoded in the last digit of the five-digit catalog number
/// (`30553` carries 3 hours).
fn hours_from_catalog_number(raw_code: &str) -> u32 {
    raw_code
        .as_bytes()
        .windows(5)
        .find(|w| w.iter().all(u8::is_ascii_digit))
        .map_or(DEFAULT_HOURS, |w| u32::from(w[4] - b'0'))
}
