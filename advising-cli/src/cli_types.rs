//! CLI type definitions: command enum and argument parsing helpers.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "advising")]
#[command(about = "Build advising data files from course catalog CSV exports", long_about = None)]
pub(crate) struct Cli {
    /// Settings file (defaults to ./advising.toml, then the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Sort undergraduate courses into advising categories
    Organize {
        /// Undergraduate CSV exports to read (repeatable)
        #[arg(short, long = "input", value_name = "CSV")]
        inputs: Vec<PathBuf>,

        /// Where to write the organized JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also print a paste-ready listing of each category
        #[arg(long)]
        snippets: bool,
    },

    /// Build the full course list from the catalog export
    BuildCatalog {
        /// Catalog CSV export
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Course list file to write
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fill in missing course titles from undergraduate CSV exports
    BackfillTitles {
        /// CSV exports to take titles from (repeatable)
        #[arg(short, long = "source", value_name = "CSV")]
        sources: Vec<PathBuf>,

        /// Course list file to update in place
        #[arg(long)]
        course_list: Option<PathBuf>,
    },

    /// Remove courses whose catalog number starts with a prefix
    DropLevel {
        /// Leading digits of the catalog numbers to remove (e.g. 50)
        #[arg(long, default_value = "50", value_parser = parse_level_prefix)]
        prefix: String,

        /// Course list file to update in place
        #[arg(long)]
        course_list: Option<PathBuf>,
    },

    /// Add a Title column to the courses report CSV
    MergeReport {
        /// Courses report CSV
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Where to write the merged report (defaults to overwriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Catalog CSV export to take titles from
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Show the resolved settings
    Config,
}

fn parse_level_prefix(s: &str) -> Result<String, String> {
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        Ok(s.to_string())
    } else {
        Err(format!("'{s}' is not a run of digits"))
    }
}
