//! Tracing/logging setup shared by the storefront binaries.

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Initialize process-wide logging with `info` as the default level.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info");
}
