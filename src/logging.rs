//! Tracing setup
//!
//! The interactive UI owns the terminal, so in TUI mode events go only to a
//! daily-rolling file under the log directory. Subcommands also log to stderr.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::MoneyFixPaths;
use crate::error::MoneyFixError;

/// Prefix of the rolling log files
pub const LOG_FILE_PREFIX: &str = "moneyfix.log";

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// File only
    Tui,
    /// File and stderr
    Cli,
}

/// Default filter directive for the given verbosity
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "moneyfix=debug"
    } else {
        "moneyfix=info"
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` overrides the default filter. Keep the returned guard alive
/// for the whole run or buffered lines are lost.
pub fn init(
    paths: &MoneyFixPaths,
    verbose: bool,
    target: LogTarget,
) -> Result<WorkerGuard, MoneyFixError> {
    let log_dir = paths.ensure_log_dir()?;
    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(verbose)))
        .map_err(|e| MoneyFixError::Config(format!("Invalid log filter: {}", e)))?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    let result = match target {
        LogTarget::Tui => registry.try_init(),
        LogTarget::Cli => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };
    result.map_err(|e| MoneyFixError::Config(format!("Failed to install logger: {}", e)))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "session started");
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "moneyfix=info");
        assert_eq!(default_directive(true), "moneyfix=debug");
    }
}
