//! Log filter setup for the `mti-tools` binary.

use tracing_subscriber::EnvFilter;

/// Builds the log filter from `RUST_LOG`-style directives.
///
/// Directives given by the user are taken as-is, including levels quieter
/// than `info`. Missing or unparsable directives fall back to `info`.
#[must_use]
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Builds the log filter from the `RUST_LOG` environment variable.
#[must_use]
pub fn log_filter_from_env() -> EnvFilter {
    log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}
