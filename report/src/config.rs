//! Reporting configuration
//!
//! Values come from code via the builder or from the environment (with an
//! optional `.env` file).

use serde::{Deserialize, Serialize};
use shared::{LogLevel, SharedError};

use crate::error::ReportResult;

pub const LEVEL_ENV: &str = "SIPP_REPORT_LEVEL";
pub const MAX_LINES_ENV: &str = "SIPP_REPORT_MAX_LINES";
pub const ALWAYS_EMIT_ENV: &str = "SIPP_REPORT_ALWAYS_EMIT";

pub const DEFAULT_MAX_LINES: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Severity used for forwarded agent output
    pub level: LogLevel,
    /// Log files longer than this are truncated
    pub max_lines: usize,
    /// Forward logs for successful runs too
    pub always_emit: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            max_lines: DEFAULT_MAX_LINES,
            always_emit: false,
        }
    }
}

impl ReportConfig {
    /// Create a new builder
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::new()
    }

    /// Load from the process environment, reading `.env` first if present
    pub fn from_env() -> ReportResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> ReportResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup(LEVEL_ENV) {
            config.level = level.parse()?;
        }

        if let Some(max_lines) = lookup(MAX_LINES_ENV) {
            config.max_lines = max_lines.trim().parse().map_err(|_| SharedError::InvalidConfig {
                field: MAX_LINES_ENV.to_string(),
                value: max_lines.clone(),
            })?;
        }

        if let Some(always_emit) = lookup(ALWAYS_EMIT_ENV) {
            config.always_emit = parse_flag(&always_emit).ok_or_else(|| SharedError::InvalidConfig {
                field: ALWAYS_EMIT_ENV.to_string(),
                value: always_emit.clone(),
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Builder for [`ReportConfig`]
pub struct ReportConfigBuilder {
    config: ReportConfig,
}

impl ReportConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ReportConfig::default(),
        }
    }

    /// Set severity for forwarded output
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    /// Set truncation limit for log files
    pub fn max_lines(mut self, max_lines: usize) -> Self {
        self.config.max_lines = max_lines;
        self
    }

    /// Forward logs even when every agent succeeded
    pub fn always_emit(mut self, always_emit: bool) -> Self {
        self.config.always_emit = always_emit;
        self
    }

    pub fn build(self) -> ReportConfig {
        self.config
    }
}

impl Default for ReportConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
