//! File logging.
//!
//! The terminal belongs to the canvas while the app runs, so log records go to
//! a rotating file instead of stderr.

use std::path::Path;

use flexi_logger::{
    detailed_format, Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming,
    WriteMode,
};

pub const LOG_FILE_BASENAME: &str = "todo";
pub const LOG_FILE_SUFFIX: &str = "log";
pub const LOG_ROTATE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
pub const LOG_ROTATE_KEEP_FILES: usize = 3;

const DEFAULT_SPEC: &str = "warn,todo=info";

/// Pick the log spec: `TODO_LOG`, then `RUST_LOG`, then the default. Blank values are skipped.
pub fn log_spec(todo_log: Option<String>, rust_log: Option<String>) -> String {
    todo_log
        .filter(|value| !value.trim().is_empty())
        .or_else(|| rust_log.filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_SPEC.to_string())
}

/// Start logging into `dir`. The returned handle must be kept alive until exit
/// so buffered records are flushed.
pub fn init_logging(dir: &Path) -> Result<LoggerHandle, FlexiLoggerError> {
    std::fs::create_dir_all(dir)?;
    let spec = log_spec(std::env::var("TODO_LOG").ok(), std::env::var("RUST_LOG").ok());

    let handle = Logger::try_with_str(&spec)?
        .log_to_file(
            FileSpec::default()
                .directory(dir)
                .basename(LOG_FILE_BASENAME)
                .suffix(LOG_FILE_SUFFIX),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .format_for_files(detailed_format)
        .rotate(
            Criterion::Size(LOG_ROTATE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(LOG_ROTATE_KEEP_FILES),
        )
        .start()?;

    log::info!("logger initialized dir={} spec={spec}", dir.display());
    Ok(handle)
}
