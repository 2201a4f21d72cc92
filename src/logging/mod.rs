//! Structured logging setup using tracing
//!
//! Diagnostics go to a timestamped console stream; user-facing
//! confirmations and errors are printed separately by the CLI layer. The
//! log level comes from `--log_level` and accepts the historical
//! DEBUG/INFO/WARNING/ERROR/CRITICAL names, case-insensitively.

use crate::domain::{PseudonymError, Result};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Initialize the logging system
///
/// Must be called once, before any other work; log level changes
/// diagnostic verbosity only, never program behavior.
pub fn init_logging(log_level_str: &str) -> Result<()> {
    let log_level = parse_log_level(log_level_str)?;

    let filter = EnvFilter::new(format!("pseudonym={log_level}"));
    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();

    tracing::debug!(level = %log_level, "Logging initialized");
    Ok(())
}

/// Map a `--log_level` value onto a tracing level
///
/// WARNING maps to warn; CRITICAL has no tracing equivalent and maps to
/// error.
fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_uppercase().as_str() {
        "DEBUG" => Ok(Level::DEBUG),
        "INFO" => Ok(Level::INFO),
        "WARNING" => Ok(Level::WARN),
        "ERROR" | "CRITICAL" => Ok(Level::ERROR),
        _ => Err(PseudonymError::Configuration(format!(
            "Invalid log level: {level_str}. Must be one of: DEBUG, INFO, WARNING, ERROR, CRITICAL"
        ))),
    }
}
