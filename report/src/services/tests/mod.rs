//! Service-specific tests

mod tracing_sink;
