//! Completed agent processes and per-run results

use serde::{Deserialize, Serialize};
use std::process::{ExitStatus, Output};

use super::agent::UserAgent;

/// Captured output streams of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streams {
    pub stdout: String,
    pub stderr: String,
}

/// A SIPp process that has terminated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedProcess {
    /// Exit code, or the negated signal number for signalled processes
    pub returncode: i32,
    pub streams: Streams,
}

impl CompletedProcess {
    pub fn new(returncode: i32, stderr: impl Into<String>) -> Self {
        Self {
            returncode,
            streams: Streams {
                stdout: String::new(),
                stderr: stderr.into(),
            },
        }
    }

    pub fn succeeded(&self) -> bool {
        self.returncode == 0
    }
}

impl From<Output> for CompletedProcess {
    fn from(output: Output) -> Self {
        Self {
            returncode: returncode(&output.status),
            streams: Streams {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            },
        }
    }
}

/// Map an exit status onto a return code, signals become negative
pub fn returncode(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }

    -1
}

/// One agent paired with the process that ran it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRun {
    pub agent: UserAgent,
    pub process: CompletedProcess,
}

/// Ordered association of agents to their completed processes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    runs: Vec<AgentRun>,
}

impl RunResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, agent: UserAgent, process: CompletedProcess) {
        self.runs.push(AgentRun { agent, process });
    }

    /// Append an agent run (fluent API)
    pub fn with(mut self, agent: UserAgent, process: CompletedProcess) -> Self {
        self.push(agent, process);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AgentRun> {
        self.runs.iter()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

impl FromIterator<(UserAgent, CompletedProcess)> for RunResult {
    fn from_iter<I: IntoIterator<Item = (UserAgent, CompletedProcess)>>(iter: I) -> Self {
        Self {
            runs: iter
                .into_iter()
                .map(|(agent, process)| AgentRun { agent, process })
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RunResult {
    type Item = &'a AgentRun;
    type IntoIter = std::slice::Iter<'a, AgentRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}
