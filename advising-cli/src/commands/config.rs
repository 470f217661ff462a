use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::settings::{LoadedSettings, user_settings_path};
use crate::{CliError, log_blank};

/// Show the resolved settings and where they came from.
pub(crate) fn run_config_show(loaded: &LoadedSettings) -> Result<(), CliError> {
    log::info!(
        "{}",
        "Advising Settings".if_supports_color(Stdout, |t| t.bold()),
    );
    log_blank();

    match &loaded.source {
        Some(p) => log::info!(
            "  Settings file: {}",
            p.display().if_supports_color(Stdout, |t| t.cyan()),
        ),
        None => log::info!(
            "  Settings file: {}",
            "(none, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }
    if let Some(user) = user_settings_path() {
        log::info!("  User settings path: {}", user.display());
    }
    log_blank();

    let text = toml::to_string_pretty(&loaded.settings)
        .map_err(|e| CliError::config(format!("Failed to render settings: {e}")))?;
    log::info!("{}", text.trim_end());
    Ok(())
}
