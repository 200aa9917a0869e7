//! Tracing and logging setup shared by binaries.

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Initialize process-wide tracing with `default_filter`.
///
/// `RUST_LOG`, when set and valid, takes precedence. Safe to call more than
/// once; later calls are no-ops.
pub fn init(default_filter: &str) {
    tracing::init(default_filter);
}
