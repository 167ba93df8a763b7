/// Process configuration
///
/// Every setting can come from a command-line flag or an environment
/// variable. Flags win.

use crate::engine::{CountingMode, DEFAULT_LIMIT};
use crate::error::{RecommendError, Result};
use clap::Parser;
use std::path::PathBuf;

/// Default dataset location, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "data/Video_Games.jsonl";

/// Default HTTP listen address
pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[derive(Parser, Debug, Clone)]
#[command(name = "corating-recommender")]
#[command(about = "Serve item-to-item recommendations from a JSON Lines review dump")]
#[command(version)]
pub struct Config {
    /// Path to the reviews JSONL file
    #[arg(long, env = "RECOMMENDER_FILE", value_name = "PATH", default_value = DEFAULT_DATA_FILE)]
    pub file: PathBuf,

    /// Address to listen on
    #[arg(long, env = "RECOMMENDER_BIND", value_name = "ADDR", default_value = DEFAULT_BIND)]
    pub bind: String,

    /// Recommendations returned when a request has no ?limit=
    #[arg(long, env = "RECOMMENDER_LIMIT", default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Largest ?limit= a request may ask for
    #[arg(long, env = "RECOMMENDER_MAX_LIMIT", default_value_t = 100)]
    pub max_limit: usize,

    /// How repeat ratings of the query item are counted: literal or distinct
    #[arg(long, env = "RECOMMENDER_COUNTING", default_value_t = CountingMode::Literal)]
    pub counting: CountingMode,

    /// Log level (error, warn, info, debug, trace). RUST_LOG overrides it.
    #[arg(long, env = "RECOMMENDER_LOG", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Check the settings make sense together
    pub fn validate(&self) -> Result<()> {
        if self.max_limit == 0 {
            return Err(RecommendError::Config(
                "max-limit must be at least 1".to_string(),
            ));
        }
        if self.limit > self.max_limit {
            return Err(RecommendError::Config(format!(
                "limit ({}) is larger than max-limit ({})",
                self.limit, self.max_limit
            )));
        }
        if self.bind.trim().is_empty() {
            return Err(RecommendError::Config("bind address is empty".to_string()));
        }
        Ok(())
    }
}
