//! File logging for the folio binary.
//!
//! The TUI owns the terminal, so log output goes to a daily-rolling file
//! under the folio home directory instead of stdout/stderr. Filtering
//! follows the FOLIO_LOG environment variable when set.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Filter applied when FOLIO_LOG is unset.
const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber with a non-blocking rolling file appender.
///
/// Returns the worker guard; dropping it flushes and stops the background
/// writer, so the caller must keep it alive for the life of the process.
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = rolling::daily(log_dir, "folio.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_ansi(false);

    Registry::default()
        .with(filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    /// Init creates the log directory and returns a live guard.
    ///
    /// Only one global subscriber can exist per process, so this is the
    /// single test that calls `init`.
    #[test]
    fn test_init_creates_log_dir() {
        let dir = tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        let guard = init(&log_dir).unwrap();

        assert!(log_dir.exists());
        drop(guard);
    }
}
