//! Tracing initialization and subscriber setup.
//!
//! Builds a `tracing_subscriber` registry with an environment-style filter
//! taken from configuration and a plain formatting layer writing to stderr.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber.
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set (any `EnvFilter` directive string)
/// 2. Default: `"info"`
///
/// Idempotent: safe to call multiple times, only the first call takes
/// effect. Failure to install (e.g. a subscriber already set by the host
/// application) is silently ignored; the host's subscriber wins.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let _ = subscriber.try_init();
}
