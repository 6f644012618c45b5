// Tracing log adapter - Subscriber setup for structured logging

use tracing_subscriber::EnvFilter;

use crate::domain::errors::*;

/// Output format of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Build the filter: `RUST_LOG` wins when set, otherwise `level`
pub fn env_filter(level: &str) -> Result<EnvFilter, DomainError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| DomainError::BadArgs(format!("Invalid log level '{}': {}", level, e))),
    }
}

/// Install the global subscriber, writing to stderr so stdout stays
/// reserved for the command line and the completion report.
pub fn init_tracing(level: &str, format: LogFormat) -> Result<(), DomainError> {
    let filter = env_filter(level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // A second initialisation (e.g. in tests) is not an error
    let _ = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_level() {
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(env_filter("ffcut=verbose").is_err());
        }
    }

    #[test]
    fn test_accepts_directives() {
        assert!(env_filter("debug").is_ok());
        assert!(env_filter("ffcut=trace,warn").is_ok());
    }

    #[test]
    fn test_init_twice_is_harmless() {
        assert!(init_tracing("warn", LogFormat::Text).is_ok());
        assert!(init_tracing("warn", LogFormat::Json).is_ok());
    }
}
