//! Category-organized output for the advising front end.
//!
//! The JSON file is an object keyed by category key, in category order:
//! ```text
//! { "americanLit": [ { "code": ..., "title": ..., "hours": 3, "level": null }, ... ], ... }
//! ```

use std::path::Path;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use advising_catalog::{CourseRecord, Level, OrganizedCatalog};

use crate::error::DataError;
use crate::util::write_atomic;

/// How upper-division courses are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelStyle {
    /// `"lower"` for lower division, `null` for everything else.
    #[default]
    Legacy,
    /// `"lower"` or `"upper"`; `null` only when no level is known.
    Explicit,
}

impl LevelStyle {
    pub(crate) fn render(self, level: Option<Level>) -> Option<&'static str> {
        match (self, level) {
            (_, Some(Level::Lower)) => Some("lower"),
            (LevelStyle::Explicit, Some(Level::Upper)) => Some("upper"),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct OrganizedCourse<'a> {
    code: &'a str,
    title: &'a str,
    hours: u32,
    level: Option<&'static str>,
}

struct OrganizedView<'a> {
    catalog: &'a OrganizedCatalog,
    style: LevelStyle,
}

impl Serialize for OrganizedView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(10))?;
        for (category, courses) in self.catalog.iter() {
            let entries: Vec<OrganizedCourse<'_>> = courses
                .iter()
                .map(|c| OrganizedCourse {
                    code: &c.code,
                    title: &c.title,
                    hours: c.hours,
                    level: self.style.render(c.level),
                })
                .collect();
            map.serialize_entry(category.key(), &entries)?;
        }
        map.end()
    }
}

/// Render the organized catalog as pretty-printed JSON.
pub fn render_organized(catalog: &OrganizedCatalog, style: LevelStyle) -> Result<String, DataError> {
    let view = OrganizedView { catalog, style };
    Ok(serde_json::to_string_pretty(&view)?)
}

/// Write the organized catalog JSON to `path`.
pub fn write_organized(
    path: &Path,
    catalog: &OrganizedCatalog,
    style: LevelStyle,
) -> Result<(), DataError> {
    let mut json = render_organized(catalog, style)?;
    json.push('\n');
    write_atomic(path, json.as_bytes())
}

/// Render a paste-ready listing of each non-empty category.
///
/// Courses are sorted by code; only lower-division courses carry a level.
pub fn render_snippets(catalog: &OrganizedCatalog) -> String {
    let mut out = String::new();

    for (category, courses) in catalog.iter() {
        if courses.is_empty() {
            continue;
        }

        out.push_str(&format!("\n// {} ({} courses)\n", category.key(), courses.len()));
        out.push_str("courses: [\n");

        let mut sorted: Vec<&CourseRecord> = courses.iter().collect();
        sorted.sort_by(|a, b| a.code.cmp(&b.code));

        for course in sorted {
            let level = if course.level == Some(Level::Lower) {
                ", level: \"lower\""
            } else {
                ""
            };
            out.push_str(&format!(
                "  {{ code: {}, title: {}, hours: {}{} }},\n",
                js_string(&course.code),
                js_string(&course.title),
                course.hours,
                level,
            ));
        }
        out.push_str("]\n");
    }

    out
}

fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}
