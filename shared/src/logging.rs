//! Shared logging utilities for consistent tracing across the plugins

use chrono::{DateTime, Utc};

/// Crates whose events pass the default filter
const PLUGIN_TARGETS: &[&str] = &["netplug", "report", "shared"];

/// Build the env-filter directive for the plugin crates at a base level
pub fn filter_directive(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    PLUGIN_TARGETS
        .iter()
        .map(|target| format!("{target}={base_level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing subscriber with the default level
pub fn init_tracing() {
    init_tracing_with_level(None);
}

/// Initialize tracing subscriber, `RUST_LOG` wins over `log_level` when set
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(log_level)));

    // A host framework may already own the global subscriber
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for agent-aware info logging
#[macro_export]
macro_rules! agent_info {
    ($agent:expr, $($arg:tt)*) => {
        tracing::info!(
            agent = %$agent,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for agent-aware warning logging
#[macro_export]
macro_rules! agent_warn {
    ($agent:expr, $($arg:tt)*) => {
        tracing::warn!(
            agent = %$agent,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for agent-aware error logging
#[macro_export]
macro_rules! agent_error {
    ($agent:expr, $($arg:tt)*) => {
        tracing::error!(
            agent = %$agent,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for agent-aware debug logging
#[macro_export]
macro_rules! agent_debug {
    ($agent:expr, $($arg:tt)*) => {
        tracing::debug!(
            agent = %$agent,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}
