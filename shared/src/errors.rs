//! Shared error types for the SIPp agent plugins

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Unknown log level: {value} (expected debug, info, warn or error)")]
    InvalidLogLevel { value: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
