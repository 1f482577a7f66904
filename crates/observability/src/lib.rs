//! Tracing/logging setup shared by every host of the inventory core.

/// Initialize process-wide logging with the `info` fallback filter.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with_default("info");
}

/// Tracing configuration (filters, layers).
pub mod tracing;
