//! Logging setup for the `arbor` binary.
//!
//! Installs a global tracing subscriber writing to stderr, filtered by
//! `RUST_LOG` and falling back to [`DEFAULT_FILTER`].

use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

pub const DEFAULT_FILTER: &str = "info";

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// `RUST_LOG` holds a directive the filter cannot parse.
    #[error("Invalid log filter {filter:?}: {source}")]
    Filter {
        filter: String,
        source: tracing_subscriber::filter::ParseError,
    },
    /// Failed to set the global tracing subscriber.
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Initialize tracing for the process.
///
/// Fails if a global subscriber is already installed or `RUST_LOG` is malformed.
pub fn init() -> Result<(), LoggingError> {
    let env_filter = build_env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok())?;
    let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    let subscriber = Registry::default().with(env_filter).with(stderr_layer);
    tracing::subscriber::set_global_default(subscriber)?;
    tracing::debug!("Logging initialized");
    Ok(())
}

fn build_env_filter(directives: Option<String>) -> Result<EnvFilter, LoggingError> {
    let filter = directives
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_owned());
    EnvFilter::try_new(&filter).map_err(|source| LoggingError::Filter { filter, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_when_unset() {
        let filter = build_env_filter(None).unwrap();
        assert_eq!(filter.to_string(), DEFAULT_FILTER);
        let filter = build_env_filter(Some("  ".into())).unwrap();
        assert_eq!(filter.to_string(), DEFAULT_FILTER);
    }

    #[test]
    fn test_explicit_filter() {
        let filter = build_env_filter(Some("id3=trace".into())).unwrap();
        assert!(filter.to_string().contains("id3=trace"));
    }

    #[test]
    fn test_malformed_filter() {
        let result = build_env_filter(Some("id3=loud".into()));
        assert!(matches!(result, Err(LoggingError::Filter { .. })));
    }
}
