//! Data model types for the course catalog.
//!
//! These types are built fresh from CSV or course-list input at the start of a
//! run and discarded once the output file is written.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Title used when no source provides one.
pub const PLACEHOLDER_TITLE: &str = "Course Title Unavailable";

/// Credit hours assumed when the source value is missing or unusable.
pub const DEFAULT_HOURS: u32 = 3;

// ── Course record ───────────────────────────────────────────────────────────

/// A single normalized course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Canonical code, e.g. `"ENGL 30553"`.
    pub code: String,
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_hours")]
    pub hours: u32,
    /// Division derived from the catalog number. `None` when the record came
    /// from a source that never carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_hours() -> u32 {
    DEFAULT_HOURS
}

impl CourseRecord {
    pub fn new(code: impl Into<String>, title: impl Into<String>, hours: u32) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            hours,
            level: None,
            description: None,
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True when the title is a real one rather than empty or the placeholder.
    pub fn has_title(&self) -> bool {
        !self.title.is_empty() && self.title != PLACEHOLDER_TITLE
    }

    /// Subject prefix of the code (everything before the first whitespace).
    pub fn subject(&self) -> &str {
        self.code.split_whitespace().next().unwrap_or("")
    }
}

/// Lower- or upper-division standing of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Lower,
    Upper,
}

impl Level {
    /// Catalog numbers below this are lower division.
    pub const UPPER_DIVISION_START: u32 = 30000;

    pub fn from_number(number: u32) -> Self {
        if number < Self::UPPER_DIVISION_START {
            Level::Lower
        } else {
            Level::Upper
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Lower => "lower",
            Level::Upper => "upper",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Category ────────────────────────────────────────────────────────────────

/// Advising category a course is filed under. Every course lands in exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    AmericanLiterature,
    BritishLiterature,
    GlobalLiterature,
    Writing,
    Theory,
    CreativeWriting,
    ProfessionalWriting,
    DigitalRhetorics,
    RhetoricsCultures,
    General,
}

impl Category {
    /// All categories in output order.
    pub const ALL: [Category; 10] = [
        Category::AmericanLiterature,
        Category::BritishLiterature,
        Category::GlobalLiterature,
        Category::Writing,
        Category::Theory,
        Category::CreativeWriting,
        Category::ProfessionalWriting,
        Category::DigitalRhetorics,
        Category::RhetoricsCultures,
        Category::General,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Category::AmericanLiterature => "American Literature",
            Category::BritishLiterature => "British Literature",
            Category::GlobalLiterature => "Global/Diasporic Literature",
            Category::Writing => "Writing",
            Category::Theory => "Theory",
            Category::CreativeWriting => "Creative Writing",
            Category::ProfessionalWriting => "Professional Writing",
            Category::DigitalRhetorics => "Digital Rhetorics",
            Category::RhetoricsCultures => "Rhetorics & Cultures",
            Category::General => "General",
        }
    }

    /// Key used for this category in the organized JSON output.
    pub fn key(self) -> &'static str {
        match self {
            Category::AmericanLiterature => "americanLit",
            Category::BritishLiterature => "britishLit",
            Category::GlobalLiterature => "globalLit",
            Category::Writing => "writing",
            Category::Theory => "theory",
            Category::CreativeWriting => "creativeWriting",
            Category::ProfessionalWriting => "professionalWriting",
            Category::DigitalRhetorics => "digitalRhetorics",
            Category::RhetoricsCultures => "rhetoricsCultures",
            Category::General => "general",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Title map ───────────────────────────────────────────────────────────────

/// Canonical code to title lookup, built once from a catalog source.
///
/// Inserting a code that is already present replaces its title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleMap {
    titles: HashMap<String, String>,
}

impl TitleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: impl Into<String>, title: impl Into<String>) {
        self.titles.insert(code.into(), title.into());
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.titles.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

impl<C: Into<String>, T: Into<String>> FromIterator<(C, T)> for TitleMap {
    fn from_iter<I: IntoIterator<Item = (C, T)>>(iter: I) -> Self {
        let mut map = TitleMap::new();
        for (code, title) in iter {
            map.insert(code, title);
        }
        map
    }
}
