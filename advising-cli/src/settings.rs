//! Settings file (`advising.toml`) and its resolution.
//!
//! Every field has a default, so a missing file or a partial one is fine.
//! Relative paths are resolved against the current directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use advising_catalog::normalize::DEFAULT_CROSS_LISTED;
use advising_catalog::{NormalizeOptions, RowLayout};
use advising_data::{CourseListFormat, LevelStyle};

use crate::CliError;

/// File name looked up in the current directory and the user config directory.
pub(crate) const SETTINGS_FILE: &str = "advising.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub paths: PathSettings,
    pub catalog: CatalogSettings,
    pub output: OutputSettings,
}

/// Input and output file locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct PathSettings {
    /// Undergraduate CSV exports (code, _, title, hours).
    pub undergraduate: Vec<PathBuf>,
    /// Full catalog CSV export (code, _, title, description).
    pub catalog: PathBuf,
    /// Courses report CSV (subject, catalog number, description).
    pub report: PathBuf,
    pub course_list: PathBuf,
    pub organized: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            undergraduate: (1..=4)
                .map(|i| PathBuf::from(format!("undergraduate ({i}).csv")))
                .collect(),
            catalog: PathBuf::from("catalog.csv"),
            report: PathBuf::from("courses-report.csv"),
            course_list: PathBuf::from("src/allCourses.json"),
            organized: PathBuf::from("organized_courses.json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct CatalogSettings {
    /// Graduate-numbered courses kept because undergraduates take them.
    pub cross_listed: Vec<String>,
    /// Subjects kept when building the course list from the catalog export.
    pub subjects: Vec<String>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            cross_listed: DEFAULT_CROSS_LISTED.iter().map(|c| c.to_string()).collect(),
            subjects: ["ENGL", "CRWT", "WRIT"].map(String::from).to_vec(),
        }
    }
}

impl CatalogSettings {
    /// Options for undergraduate exports: hours column, every subject.
    pub(crate) fn undergraduate_options(&self) -> NormalizeOptions {
        NormalizeOptions::default()
            .with_layout(RowLayout::HoursColumn)
            .with_cross_listed(self.cross_listed.iter().cloned())
    }

    /// Options for the catalog export: description column, configured subjects.
    pub(crate) fn catalog_options(&self) -> NormalizeOptions {
        NormalizeOptions::default()
            .with_layout(RowLayout::DescriptionColumn)
            .with_cross_listed(self.cross_listed.iter().cloned())
            .with_subjects(self.subjects.iter().cloned())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum ListFormat {
    #[default]
    Json,
    JsModule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct OutputSettings {
    pub format: ListFormat,
    /// Name of the exported constant in JS data modules.
    pub const_name: String,
    pub level_style: LevelStyle,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: ListFormat::Json,
            const_name: "ALL_COURSES".to_string(),
            level_style: LevelStyle::Legacy,
        }
    }
}

impl OutputSettings {
    /// Format for writing the course list at `path`.
    ///
    /// A `.js`/`.mjs` target is always written as a data module so the front
    /// end can keep importing it.
    pub(crate) fn course_list_format(&self, path: &Path, header: &str) -> CourseListFormat {
        let is_module_path = path
            .extension()
            .is_some_and(|ext| ext == "js" || ext == "mjs");

        if self.format == ListFormat::JsModule || is_module_path {
            CourseListFormat::JsModule {
                const_name: self.const_name.clone(),
                header: header.to_string(),
            }
        } else {
            CourseListFormat::Json
        }
    }
}

/// Settings together with the file they came from, if any.
#[derive(Debug, Clone)]
pub(crate) struct LoadedSettings {
    pub settings: Settings,
    pub source: Option<PathBuf>,
}

/// Canonical per-user settings path: `<config dir>/advising/advising.toml`.
pub(crate) fn user_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("advising").join(SETTINGS_FILE))
}

/// Pick the settings file using a priority chain:
///
/// 1. Explicit `--config` path
/// 2. `advising.toml` in the current directory
/// 3. The per-user settings file
pub(crate) fn resolve_settings_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    let local = PathBuf::from(SETTINGS_FILE);
    if local.is_file() {
        return Some(local);
    }
    user_settings_path().filter(|p| p.is_file())
}

/// Load settings, falling back to defaults when no file is found.
///
/// An explicit path that cannot be read or parsed is an error.
pub(crate) fn load_settings(explicit: Option<&Path>) -> Result<LoadedSettings, CliError> {
    let Some(path) = resolve_settings_path(explicit) else {
        log::debug!("No settings file found, using defaults");
        return Ok(LoadedSettings {
            settings: Settings::default(),
            source: None,
        });
    };

    let contents = std::fs::read_to_string(&path).map_err(|e| {
        CliError::config(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let settings = parse_settings(&contents)
        .map_err(|e| CliError::config(format!("Invalid settings in {}: {}", path.display(), e)))?;

    log::debug!("Loaded settings from {}", path.display());
    Ok(LoadedSettings {
        settings,
        source: Some(path),
    })
}

pub(crate) fn parse_settings(contents: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = parse_settings("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.paths.undergraduate.len(), 4);
        assert_eq!(
            settings.paths.undergraduate[0],
            PathBuf::from("undergraduate (1).csv")
        );
        assert_eq!(settings.catalog.cross_listed, vec!["ENGL 50233"]);
        assert_eq!(settings.output.format, ListFormat::Json);
    }

    #[test]
    fn test_partial_file() {
        let settings = parse_settings(
            r#"
[paths]
catalog = "exports/tcu-2026-01-22.csv"

[catalog]
cross_listed = ["ENGL 50233", "WRIT 50103"]

[output]
format = "js-module"
level_style = "explicit"
"#,
        )
        .unwrap();

        assert_eq!(settings.paths.catalog, PathBuf::from("exports/tcu-2026-01-22.csv"));
        assert_eq!(settings.paths.organized, PathBuf::from("organized_courses.json"));
        assert_eq!(settings.catalog.cross_listed.len(), 2);
        assert_eq!(settings.catalog.subjects, vec!["ENGL", "CRWT", "WRIT"]);
        assert_eq!(settings.output.format, ListFormat::JsModule);
        assert_eq!(settings.output.level_style, LevelStyle::Explicit);
        assert_eq!(settings.output.const_name, "ALL_COURSES");
    }

    #[test]
    fn test_invalid_value_rejected() {
        assert!(parse_settings("[output]\nformat = \"yaml\"\n").is_err());
    }

    #[test]
    fn test_settings_round_trip_through_toml() {
        let text = toml::to_string_pretty(&Settings::default()).unwrap();
        assert_eq!(parse_settings(&text).unwrap(), Settings::default());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let missing = tmp.path().join("advising.toml");
        assert!(load_settings(Some(&missing)).is_err());
    }

    #[test]
    fn test_explicit_file_loaded() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        std::fs::write(&path, "[output]\nconst_name = \"COURSES\"\n").unwrap();

        let loaded = load_settings(Some(&path)).unwrap();
        assert_eq!(loaded.source.as_deref(), Some(path.as_path()));
        assert_eq!(loaded.settings.output.const_name, "COURSES");
    }

    #[test]
    fn test_course_list_format() {
        let output = OutputSettings::default();
        assert_eq!(
            output.course_list_format(Path::new("src/allCourses.json"), "x"),
            CourseListFormat::Json
        );
        assert!(matches!(
            output.course_list_format(Path::new("src/allCourses.js"), "x"),
            CourseListFormat::JsModule { .. }
        ));
    }

    #[test]
    fn test_normalize_options_from_settings() {
        let catalog = CatalogSettings::default();
        let undergrad = catalog.undergraduate_options();
        assert_eq!(undergrad.layout, RowLayout::HoursColumn);
        assert!(undergrad.subjects.is_empty());
        assert!(undergrad.is_cross_listed("ENGL 50233"));

        let full = catalog.catalog_options();
        assert_eq!(full.layout, RowLayout::DescriptionColumn);
        assert_eq!(full.subjects.len(), 3);
    }
}
