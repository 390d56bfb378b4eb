//! Test helpers for inspecting what the reporter emitted

use report::{LogRecord, LogSink, LogSource};
use shared::LogLevel;
use std::sync::Mutex;

/// Log sink that keeps every record for later assertions
#[derive(Default)]
pub struct RecordingSink {
    records: Mutex<Vec<(LogLevel, LogRecord)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(LogLevel, LogRecord)> {
        self.records.lock().unwrap().clone()
    }

    /// Records that came from log files, in emission order
    pub fn logfile_records(&self) -> Vec<LogRecord> {
        self.records()
            .into_iter()
            .filter(|(_, record)| matches!(record.source, LogSource::LogFile { .. }))
            .map(|(_, record)| record)
            .collect()
    }
}

impl LogSink for RecordingSink {
    fn emit(&self, level: LogLevel, record: &LogRecord) {
        self.records.lock().unwrap().push((level, record.clone()));
    }
}
