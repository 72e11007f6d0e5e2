//! Logging to a file in the `logs` directory.

use std::path::PathBuf;

use ftlog::{
    appender::{FileAppender, Period},
    LevelFilter, LoggerGuard,
};

/// The levels of detail selectable from the command line.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum LogLevel {
    /// Nothing is logged.
    Off,
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Progress through each command.
    Info,
    /// Every alignment and merge step.
    Debug,
    /// Also traceback and gap-column details.
    Trace,
}

impl LogLevel {
    /// The matching `ftlog` filter.
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::Off,
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

/// Configures the logger.
///
/// The guard must be kept alive for as long as logs should be flushed.
///
/// # Errors
///
/// - If a logs directory could not be located/created.
/// - If the logger could not be initialized.
pub fn configure_logger(file_name: &str, level: LevelFilter) -> Result<(LoggerGuard, PathBuf), String> {
    let root_dir = PathBuf::from(".").canonicalize().map_err(|e| e.to_string())?;
    let logs_dir = root_dir.join("logs");
    if !logs_dir.exists() {
        std::fs::create_dir(&logs_dir).map_err(|e| e.to_string())?;
    }
    let log_path = logs_dir.join(format!("{file_name}.log"));

    let writer = FileAppender::builder().path(&log_path).rotate(Period::Day).build();

    let err_path = log_path.with_extension("err.log");

    let guard = ftlog::Builder::new()
        .max_log_level(level)
        .root(writer)
        // Logs from the appender itself go to `err_path`.
        .filter("ftlog::appender", "ftlog-appender", LevelFilter::Debug)
        .appender("ftlog-appender", FileAppender::new(err_path))
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok((guard, log_path))
}
