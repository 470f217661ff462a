use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use advising_catalog::{OrganizedCatalog, dedupe, organize};
use advising_data::{load_courses, render_snippets, write_organized};

use crate::settings::Settings;
use crate::{CliError, log_blank};

pub(crate) fn run_organize(
    settings: &Settings,
    inputs: Vec<PathBuf>,
    output: Option<PathBuf>,
    snippets: bool,
) -> Result<(), CliError> {
    let inputs = if inputs.is_empty() {
        settings.paths.undergraduate.clone()
    } else {
        inputs
    };
    let output = output.unwrap_or_else(|| settings.paths.organized.clone());

    let organized = organize_files(settings, &inputs)?;

    write_organized(&output, &organized, settings.output.level_style)?;
    log_blank();
    log::info!(
        "Wrote organized courses to {}",
        output.display().if_supports_color(Stdout, |t| t.cyan()),
    );

    if snippets {
        log_blank();
        log::info!("Generating listing for the advising app...");
        log::info!("{}", render_snippets(&organized));
    }

    Ok(())
}

fn organize_files(settings: &Settings, inputs: &[PathBuf]) -> Result<OrganizedCatalog, CliError> {
    let options = settings.catalog.undergraduate_options();

    log::info!(
        "{}",
        "Parsing undergraduate CSV files...".if_supports_color(Stdout, |t| t.bold()),
    );
    let mut all = Vec::new();
    for path in inputs {
        log::info!("  Reading {}...", path.display());
        let courses = load_courses(path, &options)?;
        log::info!("    Found {} courses", courses.len());
        all.extend(courses);
    }

    log_blank();
    log::info!("Total courses parsed: {}", all.len());
    let unique = dedupe(all);
    log::info!("Unique courses: {}", unique.len());
    log::debug!("Dropped {} duplicate(s)", unique.duplicates());

    log_blank();
    log::info!(
        "{}",
        "Categorizing courses...".if_supports_color(Stdout, |t| t.bold()),
    );
    let organized = organize(unique);
    for (category, courses) in organized.iter() {
        if !courses.is_empty() {
            log::info!("  {}: {} courses", category.label(), courses.len());
        }
    }

    Ok(organized)
}
