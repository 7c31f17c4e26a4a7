//! Reporter implementations for pipeline events.

mod tracing_reporter;

pub use tracing_reporter::TracingReporter;
