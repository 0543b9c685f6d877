//! # Observability
//!
//! Warning reporting for the configuration validator.
//!
//! The validator never reaches for a global logger. It receives a
//! [`WarningSink`] so that callers decide where corrections are reported and
//! tests can capture emitted messages without patching global state.
//! [`TracingWarnings`] is the production implementation over the `tracing`
//! ecosystem.

/// Destination for configuration warnings.
pub trait WarningSink: Send + Sync {
    /// Report a single warning message.
    fn warn(&self, message: &str);
}

/// Emits warnings through `tracing::warn!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingWarnings;

impl WarningSink for TracingWarnings {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "tollgate::config", "{}", message);
    }
}
