//! Post-run hook combining exit-code checking and log forwarding

use shared::RunResult;

use crate::config::ReportConfig;
use crate::error::{ReportError, ReportResult};
use crate::reporter::RunReporter;
use crate::services::TracingSink;
use crate::traits::LogSink;

/// Reporting plugin invoked once all agents of a run have exited
pub struct ReportPlugin<S: LogSink = TracingSink> {
    reporter: RunReporter<S>,
    config: ReportConfig,
}

impl ReportPlugin<TracingSink> {
    pub fn new(config: ReportConfig) -> Self {
        Self::with_reporter(RunReporter::new(), config)
    }

    /// Create plugin configured from the environment
    pub fn from_env() -> ReportResult<Self> {
        Ok(Self::new(ReportConfig::from_env()?))
    }
}

impl<S: LogSink> ReportPlugin<S> {
    pub fn with_reporter(reporter: RunReporter<S>, config: ReportConfig) -> Self {
        Self { reporter, config }
    }

    pub fn reporter(&self) -> &RunReporter<S> {
        &self.reporter
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Check exit codes, forwarding agent logs when the run failed
    ///
    /// A failure to read a log file is returned in place of the exit-code
    /// error.
    pub fn report_results(&self, run: &RunResult) -> ReportResult<()> {
        match self.reporter.check_exit_codes(run) {
            Ok(()) => {
                if self.config.always_emit {
                    self.emit(run)?;
                }
                Ok(())
            }
            Err(err @ ReportError::AgentsFailed { .. }) => {
                tracing::error!("❌ {}", err);
                self.emit(run)?;
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    fn emit(&self, run: &RunResult) -> ReportResult<()> {
        self.reporter
            .emit_logs(run, self.config.level, self.config.max_lines)
    }
}
