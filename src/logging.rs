//! Logging setup.
//!
//! Installs a global `tracing` subscriber writing to standard error, so that
//! results printed on standard output stay clean.

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{MatcherError, MatcherResult};

/// Builds the level filter: `RUST_LOG` when set, the configured level otherwise.
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Initialize the logging system.
///
/// Fails if a global subscriber has already been installed.
pub fn init_logging(config: &LogConfig) -> MatcherResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_target(false);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| MatcherError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}
