//! Exit-code checking and log forwarding for finished agents

use indexmap::IndexMap;
use shared::{agent_debug, LogLevel, RunResult, UserAgent};
use std::path::Path;

use crate::error::{ReportError, ReportResult};
use crate::services::TracingSink;
use crate::traits::LogSink;
use crate::types::{AgentExit, LogRecord, LogSource};

/// Ordered per-agent exit codes, later entries win for repeated names
pub fn exit_summary(run: &RunResult) -> Vec<AgentExit> {
    let mut codes: IndexMap<&str, i32> = IndexMap::new();
    for agent_run in run {
        codes.insert(agent_run.agent.name.as_str(), agent_run.process.returncode);
    }

    codes
        .into_iter()
        .map(|(name, returncode)| AgentExit::new(name, returncode))
        .collect()
}

/// Fail with one error describing every agent once any agent exited non-zero
pub fn check_exit_codes(run: &RunResult) -> ReportResult<()> {
    let agents = exit_summary(run);
    if agents.iter().all(|agent| agent.returncode == 0) {
        return Ok(());
    }

    let lines: Vec<String> = agents.iter().map(ToString::to_string).collect();
    let message = format!("Some SIPp agents failed\n{}", lines.join("\n"));

    Err(ReportError::AgentsFailed { message, agents })
}

/// Keep the first `max_lines` lines of `content`, appending a pointer to
/// the full file when anything was cut
pub fn truncate_lines(content: &str, max_lines: usize, path: &Path) -> String {
    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    if lines.len() <= max_lines {
        return content.to_string();
    }

    let mut output = lines[..max_lines].concat();
    output.push_str(&format!(
        "...\nOutput has been truncated to {} lines - see '{}' for full details\n",
        max_lines,
        path.display()
    ));
    output
}

/// Reports on a finished run through an injected log sink
pub struct RunReporter<S: LogSink = TracingSink> {
    sink: S,
}

impl RunReporter<TracingSink> {
    /// Create reporter writing to `tracing`
    pub fn new() -> Self {
        Self::with_sink(TracingSink::new())
    }
}

impl Default for RunReporter<TracingSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: LogSink> RunReporter<S> {
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn check_exit_codes(&self, run: &RunResult) -> ReportResult<()> {
        check_exit_codes(run)
    }

    /// Forward every agent's stderr and registered log files to the sink
    ///
    /// Log files longer than `max_lines` are truncated. Empty paths and
    /// paths that are not regular files are skipped; an existing file that
    /// cannot be read is an error.
    pub fn emit_logs(&self, run: &RunResult, level: LogLevel, max_lines: usize) -> ReportResult<()> {
        for agent_run in run {
            let ua = &agent_run.agent;

            self.sink.emit(
                level,
                &LogRecord {
                    agent: ua.name.clone(),
                    sockaddr: ua.sockaddr(),
                    source: LogSource::Stderr,
                    body: agent_run.process.streams.stderr.clone(),
                },
            );

            self.emit_logfiles(ua, level, max_lines)?;
        }

        Ok(())
    }

    /// Same as [`emit_logs`](Self::emit_logs) with the level given by name
    pub fn emit_logs_at(&self, run: &RunResult, level: &str, max_lines: usize) -> ReportResult<()> {
        let level: LogLevel = level.parse()?;
        self.emit_logs(run, level, max_lines)
    }

    fn emit_logfiles(&self, ua: &UserAgent, level: LogLevel, max_lines: usize) -> ReportResult<()> {
        for (name, path) in ua.iter_logfile_items() {
            if path.as_os_str().is_empty() || !path.is_file() {
                agent_debug!(ua.name, "⏭️ Skipping log '{}' at '{}'", name, path.display());
                continue;
            }

            let raw = std::fs::read(path).map_err(|source| ReportError::LogFileAccess {
                path: path.to_path_buf(),
                source,
            })?;
            let content = String::from_utf8_lossy(&raw);

            self.sink.emit(
                level,
                &LogRecord {
                    agent: ua.name.clone(),
                    sockaddr: ua.sockaddr(),
                    source: LogSource::LogFile {
                        name: name.to_string(),
                        path: path.to_path_buf(),
                    },
                    body: truncate_lines(&content, max_lines, path),
                },
            );
        }

        Ok(())
    }
}
