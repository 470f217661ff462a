//! advising CLI
//!
//! Turns course catalog CSV exports into the data files used by the
//! academic-advising front end.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;

use clap::Parser;

use cli_types::{Cli, Commands};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let loaded = settings::load_settings(cli.config.as_deref())?;
    let settings = &loaded.settings;

    match cli.command {
        Commands::Organize {
            inputs,
            output,
            snippets,
        } => commands::organize::run_organize(settings, inputs, output, snippets),
        Commands::BuildCatalog { input, output } => {
            commands::build_catalog::run_build_catalog(settings, input, output)
        }
        Commands::BackfillTitles {
            sources,
            course_list,
        } => commands::backfill::run_backfill_titles(settings, sources, course_list),
        Commands::DropLevel {
            prefix,
            course_list,
        } => commands::drop_level::run_drop_level(settings, &prefix, course_list),
        Commands::MergeReport {
            input,
            output,
            catalog,
        } => commands::merge_report::run_merge_report(settings, input, output, catalog),
        Commands::Config => commands::config::run_config_show(&loaded),
    }
}

/// Print an empty line through the logger so `--quiet` suppresses it too.
pub(crate) fn log_blank() {
    log::info!("");
}
