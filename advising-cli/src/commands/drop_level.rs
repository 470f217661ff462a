use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use advising_catalog::filter_by_level;
use advising_data::{load_course_list, save_course_list};

use crate::settings::Settings;
use crate::{CliError, log_blank};

pub(crate) fn run_drop_level(
    settings: &Settings,
    prefix: &str,
    course_list: Option<PathBuf>,
) -> Result<(), CliError> {
    let course_list = course_list.unwrap_or_else(|| settings.paths.course_list.clone());

    log::info!("Loading {}...", course_list.display());
    let courses = load_course_list(&course_list, &settings.output.const_name)?;
    let original = courses.len();
    log::info!("Loaded {original} courses");
    log_blank();

    log::info!("Filtering out {prefix}xxx-level courses...");
    let (kept, removed) = filter_by_level(courses, prefix);
    for course in &removed {
        log::info!("Removing: {} - {}", course.code, course.title);
    }

    let header = format!("Courses with {prefix}xxx-level catalog numbers removed");
    let format = settings.output.course_list_format(&course_list, &header);
    save_course_list(&course_list, &kept, &format, settings.output.level_style)?;

    log_blank();
    log::info!("{}", "Complete!".if_supports_color(Stdout, |t| t.green()));
    log::info!("  Courses removed: {}", removed.len());
    log::info!("  Courses remaining: {}", kept.len());
    log::info!("  Original count: {original}");
    Ok(())
}
