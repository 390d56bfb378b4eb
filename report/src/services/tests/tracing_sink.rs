//! Tests for TracingSink
//!
//! Events are captured with a scoped subscriber writing into a buffer so
//! the assertions see exactly what a log reader would.

use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use shared::LogLevel;
use tracing_subscriber::fmt::MakeWriter;

use crate::services::tracing_sink::TracingSink;
use crate::traits::LogSink;
use crate::types::{LogRecord, LogSource};

#[derive(Clone, Default)]
struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl BufferWriter {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for BufferWriter {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture(max_level: tracing::Level, f: impl FnOnce()) -> String {
    let writer = BufferWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_ansi(false)
        .with_writer(writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    writer.contents()
}

fn logfile_record() -> LogRecord {
    LogRecord {
        agent: "uac".to_string(),
        sockaddr: "127.0.0.1:5061".to_string(),
        source: LogSource::LogFile {
            name: "error_file".to_string(),
            path: PathBuf::from("/tmp/uac_errors.log"),
        },
        body: "unexpected 503\n".to_string(),
    }
}

#[test]
fn test_emit_tags_agent_source_and_socket() {
    let output = capture(tracing::Level::TRACE, || {
        TracingSink::new().emit(LogLevel::Warn, &logfile_record());
    });

    assert!(output.contains("WARN"), "Should log at warn: {output}");
    assert!(output.contains("agent=uac"));
    assert!(output.contains("source=error_file"));
    assert!(output.contains("sockaddr=127.0.0.1:5061"));
    assert!(output.contains("unexpected 503"));
}

#[test]
fn test_each_level_maps_to_matching_tracing_level() {
    for (level, tag) in [
        (LogLevel::Debug, "DEBUG"),
        (LogLevel::Info, "INFO"),
        (LogLevel::Warn, "WARN"),
        (LogLevel::Error, "ERROR"),
    ] {
        let output = capture(tracing::Level::TRACE, || {
            TracingSink::new().emit(level, &logfile_record());
        });
        assert!(output.contains(tag), "{level} should log as {tag}: {output}");
    }
}

#[test]
fn test_debug_records_are_filtered_below_threshold() {
    let output = capture(tracing::Level::INFO, || {
        TracingSink::new().emit(LogLevel::Debug, &logfile_record());
    });
    assert!(output.is_empty());
}
