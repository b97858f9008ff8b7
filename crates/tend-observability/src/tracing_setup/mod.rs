//! Process-wide `tracing` subscriber configuration.

pub mod spans;

use tend_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Resolve the filter: `RUST_LOG` when set and valid, else the configured level.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(tend_core::config::defaults::DEFAULT_LOG_LEVEL))
}

/// Install the global subscriber.
///
/// Returns `false` if a subscriber was already installed; the existing one
/// is kept.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let builder = tracing_subscriber::fmt().with_env_filter(build_filter(config));
    let installed = if config.json_logs {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };
    if installed {
        tracing::debug!(level = %config.log_level, json = config.json_logs, "tracing initialized");
    }
    installed
}
