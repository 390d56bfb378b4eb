//! Reporting for finished SIPp agents
//!
//! Turns agent exit codes into a single readable failure and forwards each
//! agent's stderr and log files to a log sink, truncating long files.

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod plugin;
pub mod reporter;
pub mod services;
pub mod traits;
pub mod types;

pub use config::{ReportConfig, ReportConfigBuilder};
pub use error::{ReportError, ReportResult};
pub use exit_codes::{explain, EXIT_CODES, UNKNOWN_EXIT_CODE};
pub use plugin::ReportPlugin;
pub use reporter::{check_exit_codes, exit_summary, RunReporter};
pub use services::TracingSink;
pub use traits::{LogSink, MockLogSink};
pub use types::{AgentExit, LogRecord, LogSource};
