//! Logging integration for the searchset library.
//!
//! Provides a helper for configuring [`tracing`]-based logging from a
//! catalog configuration's log level.

use crate::config::CatalogConfig;

/// Sets up the global tracing subscriber with the given filter directive
/// (e.g. "debug", "info", "searchset_mapping=trace").
///
/// Installation is best-effort: if a subscriber is already set, the existing
/// one is kept.
pub fn setup_logging(filter: &str) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    if fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
    {
        tracing::debug!("searchset logging initialized");
    }
}

/// Sets up logging from a [`CatalogConfig`]'s `log_level`.
pub fn setup_logging_from_config(config: &CatalogConfig) {
    setup_logging(&config.log_level);
}
