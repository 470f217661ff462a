use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use advising_data::{load_title_map, merge_report_titles};

use crate::settings::Settings;
use crate::{CliError, log_blank};

pub(crate) fn run_merge_report(
    settings: &Settings,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    catalog: Option<PathBuf>,
) -> Result<(), CliError> {
    let input = input.unwrap_or_else(|| settings.paths.report.clone());
    let output = output.unwrap_or_else(|| input.clone());
    let catalog = catalog.unwrap_or_else(|| settings.paths.catalog.clone());

    log::info!("Reading course titles from {}...", catalog.display());
    let titles = load_title_map(std::slice::from_ref(&catalog))?;
    log::info!("Found {} course titles", titles.len());
    log_blank();

    log::info!("Reading {}...", input.display());
    let counts = merge_report_titles(&input, &output, &titles)?;
    log::info!(
        "Wrote updated file to {}",
        output.display().if_supports_color(Stdout, |t| t.cyan()),
    );

    log_blank();
    log::info!("{}", "Completed!".if_supports_color(Stdout, |t| t.green()));
    log::info!("  Courses with titles added: {}", counts.with_title);
    log::info!("  Courses without matching titles: {}", counts.without_title);
    log::info!("  Total courses: {}", counts.total());
    Ok(())
}
