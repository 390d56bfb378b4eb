//! Report records and exit summaries

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::exit_codes::explain;

/// Where a forwarded chunk of agent output came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogSource {
    Stderr,
    LogFile { name: String, path: PathBuf },
}

impl fmt::Display for LogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogSource::Stderr => write!(f, "stderr"),
            LogSource::LogFile { name, .. } => write!(f, "{name}"),
        }
    }
}

/// One chunk of agent output destined for a log sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub agent: String,
    pub sockaddr: String,
    pub source: LogSource,
    pub body: String,
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            LogSource::Stderr => write!(f, "stderr for '{}'\n{}\n", self.agent, self.body),
            LogSource::LogFile { name, .. } => write!(
                f,
                "'{}' contents for {} @ socket {}:\n{}",
                name, self.agent, self.sockaddr, self.body
            ),
        }
    }
}

/// Exit code of one agent with its explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentExit {
    pub name: String,
    pub returncode: i32,
    pub explanation: String,
}

impl AgentExit {
    pub fn new(name: impl Into<String>, returncode: i32) -> Self {
        Self {
            name: name.into(),
            returncode,
            explanation: explain(returncode).to_string(),
        }
    }
}

impl fmt::Display for AgentExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' with exit code '{}' -> {}",
            self.name, self.returncode, self.explanation
        )
    }
}
