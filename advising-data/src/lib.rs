//! File formats for the advising toolkit.
//!
//! Reads registrar CSV exports, loads and saves course lists (plain JSON or
//! the legacy JS data module), writes the category-organized JSON consumed by
//! the advising front end, and merges titles into the courses report.

pub mod course_list;
pub mod csv_rows;
pub mod error;
pub mod organized;
pub mod report;
pub mod titles;
pub(crate) mod util;

pub use course_list::{CourseListFormat, load_course_list, render_course_list, save_course_list};
pub use csv_rows::{load_courses, parse_rows, read_rows};
pub use error::DataError;
pub use organized::{LevelStyle, render_organized, render_snippets, write_organized};
pub use report::{MergeCounts, merge_report_titles};
pub use titles::{build_title_map, load_title_map};
