//! Tracing setup for suite runners.

use listsws_core::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Filter for the configured level. `RUST_LOG`-style directives such as
/// `listsws_suite=debug,info` are accepted.
///
/// ## Errors
/// Returns an error if the level is not a valid filter directive.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
    EnvFilter::try_new(&config.level)
}

/// Installs the global fmt subscriber.
///
/// ## Errors
/// Returns an error if the level is invalid or a global subscriber is
/// already installed.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
