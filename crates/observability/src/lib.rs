//! Logging setup shared by applications embedding the famfin domain.
//!
//! The domain crates only emit `tracing` events; nothing is printed until an
//! embedding process installs a subscriber through [`init`].

/// Tracing subscriber configuration.
pub mod tracing;

/// Initialize process-wide logging.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init();
}
