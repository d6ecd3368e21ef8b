//! Tracing subscriber setup.
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::config::LogFormat;
use crate::error::AppError;

/// Service name stamped on JSON log lines
pub const SERVICE_NAME: &str = "tutorlens";

/// Install the global subscriber.
///
/// Fails only on an invalid filter directive. If a subscriber is already
/// installed (e.g. a previous call in the same test binary) this is a no-op.
pub fn init_tracing(format: LogFormat, filter: &str) -> Result<(), AppError> {
    let env_filter = EnvFilter::try_new(filter)
        .map_err(|e| AppError::Config(format!("Invalid log filter '{}': {}", filter, e)))?;

    let result = match format {
        LogFormat::Pretty => Registry::default()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => Registry::default()
            .with(env_filter)
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(
                SERVICE_NAME.to_string(),
                std::io::stderr,
            ))
            .try_init(),
    };

    if let Err(e) = result {
        tracing::debug!("Tracing subscriber already installed: {}", e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_repeatable() {
        assert!(init_tracing(LogFormat::Pretty, "warn").is_ok());
        assert!(init_tracing(LogFormat::Json, "debug").is_ok());
    }

    #[test]
    fn test_invalid_filter() {
        let err = init_tracing(LogFormat::Pretty, "tutorlens_core=loud").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
