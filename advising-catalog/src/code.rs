//! Parser for registrar course codes.
//!
//! Catalog exports write codes with the subject prefix glued to the catalog
//! number:
//! ```text
//! ENGL30553
//! ```
//! The canonical form used everywhere else separates them with one space
//! (`ENGL 30553`).

use std::fmt;

/// A course code split into its subject prefix and catalog number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CourseCode {
    subject: String,
    number: String,
}

impl CourseCode {
    /// Parse a raw code of the form `<letters><digits>`.
    ///
    /// Whitespace between the two halves is tolerated so already-canonical
    /// codes parse too. Returns `None` for anything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use advising_catalog::CourseCode;
    ///
    /// let code = CourseCode::parse("ENGL30553").unwrap();
    /// assert_eq!(code.subject(), "ENGL");
    /// assert_eq!(code.number(), "30553");
    /// assert_eq!(code.to_string(), "ENGL 30553");
    ///
    /// assert!(CourseCode::parse("ENGL-30553").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let split = raw.find(|c: char| !c.is_ascii_alphabetic())?;
        let (subject, rest) = raw.split_at(split);
        if subject.is_empty() {
            return None;
        }

        let number = rest.trim_start();
        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        Some(Self {
            subject: subject.to_string(),
            number: number.to_string(),
        })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// Catalog number as an integer, or `None` if it does not fit in a `u32`.
    pub fn numeric(&self) -> Option<u32> {
        self.number.parse().ok()
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.subject, self.number)
    }
}

/// Format a raw code into canonical `"PREFIX NNNNN"` form.
///
/// Codes that do not look like `<letters><digits>` come back trimmed but
/// otherwise unchanged.
pub fn format_code(raw: &str) -> String {
    match CourseCode::parse(raw) {
        Some(code) => code.to_string(),
        None => raw.trim().to_string(),
    }
}
