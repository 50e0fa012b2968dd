//! Debug sink that forwards host diagnostics to `tracing`

use crate::domain::ports::DebugSink;

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDebugSink;

impl DebugSink for TracingDebugSink {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "compliance_markup::host", "{}", message);
    }
}
