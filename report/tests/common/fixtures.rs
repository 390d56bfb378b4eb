//! Log file and run fixtures for reporter tests

use shared::{CompletedProcess, RunResult, UserAgent};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestFixtures;

impl TestFixtures {
    /// Lines are numbered so truncation points are easy to assert
    pub fn numbered_lines(count: usize) -> String {
        (1..=count).map(|i| format!("log line {i}\n")).collect()
    }

    pub fn write_log(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write log fixture");
        path
    }

    pub fn agent_with_log(name: &str, log_name: &str, path: &Path) -> UserAgent {
        UserAgent::new(name)
            .with_srcaddr("127.0.0.1:5060".parse().unwrap())
            .with_logfile(log_name, path)
    }

    pub fn single_run(agent: UserAgent, returncode: i32) -> RunResult {
        RunResult::new().with(agent, CompletedProcess::new(returncode, format!("stderr of rc {returncode}")))
    }
}
