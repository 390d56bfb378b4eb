//! Service implementations
//!
//! Production log sinks used by the reporter.

pub mod tracing_sink;

#[cfg(test)]
mod tests;

pub use tracing_sink::TracingSink;
