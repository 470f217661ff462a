use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use advising_catalog::dedupe;
use advising_data::{load_courses, save_course_list};

use crate::CliError;
use crate::settings::Settings;

/// Build the flat course list from the full catalog export.
///
/// Keeps only the configured subjects, drops duplicate codes, and writes the
/// list sorted by code.
pub(crate) fn run_build_catalog(
    settings: &Settings,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<(), CliError> {
    let input = input.unwrap_or_else(|| settings.paths.catalog.clone());
    let output = output.unwrap_or_else(|| settings.paths.course_list.clone());

    let courses = load_courses(&input, &settings.catalog.catalog_options())?;
    let unique = dedupe(courses);
    if unique.duplicates() > 0 {
        log::debug!("Dropped {} duplicate course code(s)", unique.duplicates());
    }

    let mut courses = unique.into_records();
    courses.sort_by(|a, b| a.code.cmp(&b.code));

    let header = format!("Generated from {}", input.display());
    let format = settings.output.course_list_format(&output, &header);
    save_course_list(&output, &courses, &format, settings.output.level_style)?;

    log::info!(
        "Written {} courses to {}",
        courses.len().if_supports_color(Stdout, |t| t.bold()),
        output.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
