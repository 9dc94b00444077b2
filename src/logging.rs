use std::env;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter, e.g. `wellnoosh_planner=debug`.
pub const LOG_ENV_VAR: &str = "WELLNOOSH_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber, logging to stderr so stdout stays clean
/// for plan output. Safe to call more than once.
pub fn init_logger() {
    let filter = env::var(LOG_ENV_VAR).unwrap_or_else(|_| DEFAULT_FILTER.to_string());
    let filter_layer = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter_layer)
        .try_init();
}
