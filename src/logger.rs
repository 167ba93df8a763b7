/// Logging setup via tracing-subscriber
///
/// Call [`init`] once at startup, before the dataset is loaded.

use crate::error::{RecommendError, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber, writing to stderr
///
/// `RUST_LOG` takes precedence when set; `level` is the fallback.
pub fn init(level: &str) -> Result<()> {
    parse_level(level)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| RecommendError::Logger(format!("invalid log level '{}': {}", level, e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| RecommendError::Logger(format!("failed to set subscriber: {}", e)))?;

    Ok(())
}

/// Parse a log level string, rejecting anything tracing doesn't know
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    if level.is_empty() {
        return Err(RecommendError::Logger("log level must not be empty".to_string()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| RecommendError::Logger(format!("unrecognised log level: '{}'", level)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_levels() {
        for l in ["error", "warn", "info", "debug", "trace"] {
            assert!(parse_level(l).is_ok(), "expected '{l}' to be valid");
        }
    }

    #[test]
    fn test_invalid_levels() {
        assert!(parse_level("verbose").is_err());
        assert!(parse_level("").is_err());
    }

    #[test]
    fn test_init_rejects_bad_level() {
        assert!(matches!(init("loud"), Err(RecommendError::Logger(_))));
    }
}
