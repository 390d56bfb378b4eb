//! Trait definitions with mockall annotations for testing

use shared::LogLevel;

use crate::types::LogRecord;

/// Destination for agent output forwarded by the reporter
#[mockall::automock]
pub trait LogSink {
    /// Emit one record at the given severity
    fn emit(&self, level: LogLevel, record: &LogRecord);
}
