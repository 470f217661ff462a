//! Load and save the flat list of all courses.
//!
//! Two on-disk shapes are supported. The plain JSON array is the default.
//! The legacy data module wraps the same array in a source file:
//! ```text
//! // Undergraduate courses only (10000-40000 level)
//! export const ALL_COURSES = [ ... ];
//! ```

use std::path::Path;

use serde::Serialize;

use advising_catalog::CourseRecord;

use crate::error::DataError;
use crate::organized::LevelStyle;
use crate::util::{read_input, write_atomic};

/// How a course list is written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseListFormat {
    /// A pretty-printed JSON array.
    Json,
    /// `export const <const_name> = <json>;` preceded by a `//` comment.
    JsModule { const_name: String, header: String },
}

/// One course as written to a course list. `level` goes through the
/// [`LevelStyle`], so the legacy style never writes `"upper"`.
#[derive(Serialize)]
struct ListedCourse<'a> {
    code: &'a str,
    title: &'a str,
    hours: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

/// Load a course list, detecting which format the file is in.
///
/// Content starting with `[` is read as a JSON array. Anything else must
/// contain an `export const <const_name> = [...]` declaration; when it does
/// not, the load fails with [`DataError::ConstNotFound`].
pub fn load_course_list(path: &Path, const_name: &str) -> Result<Vec<CourseRecord>, DataError> {
    let content = read_input(path)?;

    let json = if content.trim_start().starts_with('[') {
        content.as_str()
    } else {
        extract_const_array(&content, const_name)
            .ok_or_else(|| DataError::const_not_found(const_name, path))?
    };

    Ok(serde_json::from_str(json)?)
}

/// Render and atomically write a course list.
pub fn save_course_list(
    path: &Path,
    courses: &[CourseRecord],
    format: &CourseListFormat,
    style: LevelStyle,
) -> Result<(), DataError> {
    let content = render_course_list(courses, format, style)?;
    write_atomic(path, content.as_bytes())
}

/// Render a course list in the given format.
///
/// Levels the style does not write are left out of the record entirely.
pub fn render_course_list(
    courses: &[CourseRecord],
    format: &CourseListFormat,
    style: LevelStyle,
) -> Result<String, DataError> {
    let listed: Vec<ListedCourse<'_>> = courses
        .iter()
        .map(|c| ListedCourse {
            code: &c.code,
            title: &c.title,
            hours: c.hours,
            level: style.render(c.level),
            description: c.description.as_deref(),
        })
        .collect();
    let json = serde_json::to_string_pretty(&listed)?;
    Ok(match format {
        CourseListFormat::Json => format!("{json}\n"),
        CourseListFormat::JsModule { const_name, header } => {
            let mut out = String::new();
            for line in header.lines() {
                out.push_str("// ");
                out.push_str(line);
                out.push('\n');
            }
            out.push_str(&format!("export const {const_name} = {json};\n"));
            out
        }
    })
}

/// Find the array literal bound by `export const <name> = [...];`.
///
/// The array runs from the first `[` after the `=` to the last `];` in the
/// file.
fn extract_const_array<'a>(content: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("export const {name}");

    for (pos, _) in content.match_indices(&needle) {
        let rest = &content[pos + needle.len()..];
        let after_name = rest.trim_start();
        // Reject longer identifiers that merely start with `name`.
        if after_name.len() == rest.len() && !rest.starts_with('=') {
            continue;
        }
        let Some(after_eq) = after_name.strip_prefix('=') else {
            continue;
        };
        let array = after_eq.trim_start();
        if !array.starts_with('[') {
            continue;
        }
        let end = array.rfind("];")?;
        return Some(&array[..=end]);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use advising_catalog::Level;

    const MODULE: &str = r#"// Filtered 55000-level courses
export const ALL_COURSES = [
  {
    "code": "CRWT 10203",
    "title": "Intro to Creative Writing",
    "hours": 3,
    "description": "Workshop in which students present their writing."
  },
  {
    "code": "ENGL 50233",
    "title": "Course Title Unavailable",
    "hours": 3
  }
];
"#;

    #[test]
    fn test_extract_const_array() {
        let json = extract_const_array(MODULE, "ALL_COURSES").unwrap();
        assert!(json.starts_with('['));
        assert!(json.ends_with(']'));
        assert!(extract_const_array(MODULE, "OTHER").is_none());
        assert!(extract_const_array(MODULE, "ALL").is_none());
    }

    #[test]
    fn test_extract_tolerates_spacing() {
        let content = "export const ALL_COURSES=[{\"code\": \"ENGL 30553\"}];";
        assert_eq!(
            extract_const_array(content, "ALL_COURSES"),
            Some("[{\"code\": \"ENGL 30553\"}]")
        );
    }

    #[test]
    fn test_load_js_module() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("allCourses.js");
        std::fs::write(&path, MODULE).unwrap();

        let courses = load_course_list(&path, "ALL_COURSES").unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].code, "CRWT 10203");
        assert_eq!(courses[0].level, None);
        assert_eq!(courses[1].description, None);
    }

    #[test]
    fn test_load_missing_const_is_fatal() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("allCourses.js");
        std::fs::write(&path, "export const SOMETHING_ELSE = [];\n").unwrap();

        let err = load_course_list(&path, "ALL_COURSES").unwrap_err();
        assert!(matches!(err, DataError::ConstNotFound { .. }));
    }

    #[test]
    fn test_save_and_reload_both_formats() {
        let tmp = tempfile::TempDir::new().unwrap();
        let courses = vec![
            CourseRecord::new("ENGL 20803", "Intro to \"Fiction\"", 3).with_level(Level::Lower),
            CourseRecord::new("ENGL 30553", "Café Culture", 3).with_description("Line one\nline two"),
        ];

        let json_path = tmp.path().join("out/allCourses.json");
        save_course_list(&json_path, &courses, &CourseListFormat::Json, LevelStyle::Legacy).unwrap();
        assert_eq!(load_course_list(&json_path, "ALL_COURSES").unwrap(), courses);

        let js_path = tmp.path().join("allCourses.js");
        let format = CourseListFormat::JsModule {
            const_name: "ALL_COURSES".to_string(),
            header: "Undergraduate courses only (10000-40000 level)".to_string(),
        };
        save_course_list(&js_path, &courses, &format, LevelStyle::Legacy).unwrap();

        let text = std::fs::read_to_string(&js_path).unwrap();
        assert!(text.starts_with("// Undergraduate courses only"));
        assert!(text.contains("export const ALL_COURSES = ["));
        assert!(text.contains("Café"));
        assert!(!tmp.path().join("allCourses.js.tmp").exists());
        assert_eq!(load_course_list(&js_path, "ALL_COURSES").unwrap(), courses);
    }

    #[test]
    fn test_render_json_indent() {
        let courses = vec![CourseRecord::new("ENGL 30553", "Novel", 3)];
        let text = render_course_list(&courses, &CourseListFormat::Json, LevelStyle::Legacy).unwrap();
        assert!(text.starts_with("[\n  {\n    \"code\": \"ENGL 30553\""));
    }

    #[test]
    fn test_render_level_follows_style() {
        let courses = vec![
            CourseRecord::new("ENGL 30553", "Novel", 3).with_level(Level::Upper),
            CourseRecord::new("ENGL 20803", "Fiction", 3).with_level(Level::Lower),
        ];

        let legacy = render_course_list(&courses, &CourseListFormat::Json, LevelStyle::Legacy).unwrap();
        assert!(!legacy.contains("\"upper\""));
        let value: serde_json::Value = serde_json::from_str(&legacy).unwrap();
        assert!(value[0].get("level").is_none());
        assert_eq!(value[1]["level"], "lower");

        let explicit =
            render_course_list(&courses, &CourseListFormat::Json, LevelStyle::Explicit).unwrap();
        let value: serde_json::Value = serde_json::from_str(&explicit).unwrap();
        assert_eq!(value[0]["level"], "upper");
        assert_eq!(value[1]["level"], "lower");
    }

    #[test]
    fn test_legacy_save_drops_upper_on_reload() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("allCourses.json");
        let courses = vec![CourseRecord::new("ENGL 30553", "Novel", 3).with_level(Level::Upper)];
        save_course_list(&path, &courses, &CourseListFormat::Json, LevelStyle::Legacy).unwrap();

        let reloaded = load_course_list(&path, "ALL_COURSES").unwrap();
        assert_eq!(reloaded[0].level, None);
    }
}
