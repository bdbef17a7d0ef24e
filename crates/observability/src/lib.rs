//! Tracing and logging setup shared by every binary in the workspace.

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use self::tracing::LogOutput;

/// Initialize process-wide observability with the default `info` filter.
///
/// `RUST_LOG` overrides the filter when set. This is safe to call multiple
/// times; subsequent calls become no-ops.
pub fn init(output: LogOutput) {
    self::tracing::init(output, "info");
}
