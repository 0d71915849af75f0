//! Logging setup.
//!
//! Warnings (unreadable files, skipped entries) go to stderr at the level
//! picked on the command line. `--log-file` adds a debug-level copy on disk.

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::OpenOptions;
use std::path::Path;

fn log_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build()
}

/// Initialize the global logger. Failures are reported on stderr and ignored.
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) {
    let config = log_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    if let Some(path) = log_file {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => loggers.push(WriteLogger::new(LevelFilter::Debug, config, file)),
            Err(e) => eprintln!(
                "tracklist: could not open log file {}: {}",
                path.display(),
                e
            ),
        }
    }

    if CombinedLogger::init(loggers).is_err() {
        eprintln!("tracklist: logger already initialized");
    }
}
