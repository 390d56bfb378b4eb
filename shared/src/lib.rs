//! Shared types for the SIPp agent plugins
//!
//! Contains the data model both plugins read from the orchestrator
//! (agents, scenarios, completed processes), the common error type and
//! the tracing setup used across the workspace.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
