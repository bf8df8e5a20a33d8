//! Telemetry and Observability
//!
//! Installs the global `tracing-subscriber` once per process, after the CLI
//! flags and config have resolved the effective log level. A `RUST_LOG`
//! environment variable still overrides both when set.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Effective log level: the `--log` flag wins over the config value
pub fn resolve_log_level<'a>(cli_level: Option<&'a str>, config_level: &'a str) -> &'a str {
    cli_level.unwrap_or(config_level)
}

/// Env-filter directives for a bare level, scoped to the engine target
fn default_directives(level: &str) -> String {
    format!("{level},wayfarer_engine={level}")
}

/// Install the global tracing subscriber at the given level
///
/// Called exactly once, after the log level has been resolved; a second
/// call is a no-op because the global default is already set.
///
/// In debug builds: pretty-printed terminal output.
/// In release builds: JSON structured output with spans.
pub fn init_telemetry(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(log_level)));

    #[cfg(debug_assertions)]
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty().with_target(false))
            .try_init()
            .ok();
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_current_span(true))
            .try_init()
            .ok();
    }
}
