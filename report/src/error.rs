//! Reporting plugin error types

use shared::SharedError;
use std::path::PathBuf;
use thiserror::Error;

use crate::types::AgentExit;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("{message}")]
    AgentsFailed {
        message: String,
        agents: Vec<AgentExit>,
    },

    #[error("Failed to read log file {}: {source}", .path.display())]
    LogFileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Configuration(#[from] SharedError),
}

pub type ReportResult<T> = Result<T, ReportError>;
