//! Tracing subscriber setup

use crate::config::{ConfigError, ConfigResult};
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Filter directive for a base level, with hyper's connection chatter
/// capped at `warn`
pub fn directive(level: &str) -> String {
    format!("hyper=warn,{level}")
}

/// Install the global subscriber, writing to stderr
pub fn init(level: &str) -> ConfigResult<()> {
    let filter = EnvFilter::try_new(directive(level))
        .map_err(|e| ConfigError::invalid_value("log_level", e.to_string()))?;

    registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| ConfigError::invalid_value("log_level", e.to_string()))
}
