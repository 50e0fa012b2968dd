//! Debug sink port
//!
//! Host-facing diagnostics. A sink must never fail.

pub trait DebugSink: Send + Sync {
    fn debug(&self, message: &str);
}

/// Discards every message
pub struct NoopDebugSink;

impl DebugSink for NoopDebugSink {
    fn debug(&self, _message: &str) {}
}
