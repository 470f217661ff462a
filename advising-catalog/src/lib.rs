//! Course catalog data model and the rules applied to it.
//!
//! This crate holds the pure side of the advising toolkit: the course record
//! type, course-code parsing, row normalization, category classification,
//! deduplication, title backfill and level-range filtering. It performs no
//! file I/O; `advising-data` reads and writes the files these types flow
//! through.

pub mod backfill;
pub mod classify;
pub mod code;
pub mod dedupe;
pub mod level_filter;
pub mod normalize;
pub mod types;

pub use backfill::{BackfillReport, backfill};
pub use classify::{OrganizedCatalog, classify, organize};
pub use code::{CourseCode, format_code};
pub use dedupe::{CourseSet, dedupe};
pub use level_filter::filter_by_level;
pub use normalize::{NormalizeOptions, RowLayout, normalize_row, parse_hours};
pub use types::*;
