//! Logger setup for the `advising` binary.

use std::io::Write;

use log::LevelFilter;

/// Install the global logger, writing to stdout.
///
/// Normal output is logged at `info` and printed bare. `--quiet` keeps only
/// warnings and errors; `--verbose` adds debug messages and timestamps.
/// `RUST_LOG` overrides the level.
pub(crate) fn init_logger(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(move |buf, record| {
            if verbose {
                writeln!(
                    buf,
                    "[{} {:<5} {}] {}",
                    buf.timestamp(),
                    record.level(),
                    record.target(),
                    record.args()
                )
            } else if record.level() == log::Level::Info {
                writeln!(buf, "{}", record.args())
            } else {
                writeln!(
                    buf,
                    "{}: {}",
                    record.level().as_str().to_lowercase(),
                    record.args()
                )
            }
        })
        .init();
}
