//! Host-side adapters: static key/value lookup and the tracing debug sink

mod debug_sink;
mod static_lookup;

pub use debug_sink::TracingDebugSink;
pub use static_lookup::StaticLookup;
