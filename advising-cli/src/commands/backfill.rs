use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use advising_catalog::backfill;
use advising_data::{load_course_list, load_title_map, save_course_list};

use crate::settings::Settings;
use crate::{CliError, log_blank};

pub(crate) fn run_backfill_titles(
    settings: &Settings,
    sources: Vec<PathBuf>,
    course_list: Option<PathBuf>,
) -> Result<(), CliError> {
    let sources = if sources.is_empty() {
        settings.paths.undergraduate.clone()
    } else {
        sources
    };
    let course_list = course_list.unwrap_or_else(|| settings.paths.course_list.clone());

    log::info!("Parsing CSV files for course titles...");
    let titles = load_title_map(&sources)?;
    log::info!("Found {} course titles from CSVs", titles.len());
    log_blank();

    log::info!("Loading {}...", course_list.display());
    let mut courses = load_course_list(&course_list, &settings.output.const_name)?;
    log::info!("Loaded {} courses", courses.len());
    log_blank();

    log::info!("Updating course titles...");
    let report = backfill(&mut courses, &titles);
    for (code, title) in &report.updated {
        log::info!("Updated: {code} -> {title}");
    }
    for code in &report.still_missing {
        log::info!("No title found for: {code}");
    }

    let format = settings
        .output
        .course_list_format(&course_list, "Course titles backfilled from catalog exports");
    save_course_list(&course_list, &courses, &format, settings.output.level_style)?;

    log_blank();
    log::info!("{}", "Complete!".if_supports_color(Stdout, |t| t.green()));
    log::info!("  Updated titles: {}", report.updated_count());
    log::info!("  Still unavailable: {}", report.missing_count());
    log::info!("  Total courses: {}", courses.len());
    Ok(())
}
