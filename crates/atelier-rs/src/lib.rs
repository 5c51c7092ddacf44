//! Public SDK surface for Atelier.
//!
//! This crate re-exports the building blocks and provides a small logging
//! initialization helper to keep consumer setup consistent.

/// Re-export for convenience.
pub use atelier_rs_config as config;
pub use atelier_rs_core as core;
/// Re-export for convenience.
pub use atelier_rs_llm as llm;
/// Re-export for convenience.
pub use atelier_rs_memory as memory;
/// Re-export for convenience.
pub use atelier_rs_server as server;

#[inline]
/// Initialize logging using env_logger.
///
/// Binaries are expected to call this early in startup so log output is
/// wired up before the first outbound call.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
