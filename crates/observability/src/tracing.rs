//! Tracing/logging initialization.
//!
//! Logs always go to stderr. Report output owns stdout.

use tracing_subscriber::EnvFilter;

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogOutput {
    /// One JSON object per line, with timestamps.
    #[default]
    Json,
    /// Human-readable single-line records.
    Compact,
}

/// `RUST_LOG` if present and valid, otherwise `default_filter`.
fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(output: LogOutput, default_filter: &str) {
    let filter = env_filter(default_filter);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match output {
        LogOutput::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogOutput::Compact => builder.compact().try_init(),
    };
}
