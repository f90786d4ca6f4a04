//! File logging through tracing
//!
//! The TUI owns stdout, so every event goes to a daily rolling file under
//! `<data dir>/microdesigner/logs/` (`microdesigner.log.YYYY-MM-DD`).

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, ResultExt};

/// Environment variable holding the tracing filter directive
pub const LOG_ENV_VAR: &str = "MICRODESIGNER_LOG";

/// Prefix of the rolling log files; the appender adds the date suffix
const LOG_FILE_PREFIX: &str = "microdesigner.log";

const DEFAULT_FILTER: &str = "microdesigner=info,warn";

/// Install the global subscriber
///
/// ```bash
/// MICRODESIGNER_LOG=debug microdesigner
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    tracing_subscriber::registry()
        .with(build_filter(std::env::var(LOG_ENV_VAR).ok()))
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_dir = %log_dir.display(),
        "MicroDesigner starting"
    );

    Ok(())
}

/// Filter from the environment directive, or the default when it is
/// missing or does not parse
fn build_filter(directive: Option<String>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("microdesigner").join("logs")
}
