//! Log sink forwarding agent output to `tracing`

use shared::{agent_debug, agent_error, agent_info, agent_warn, LogLevel};

use crate::traits::LogSink;
use crate::types::LogRecord;

/// Sink writing each record as a `tracing` event tagged with the agent,
/// the output source and the agent's socket
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn emit(&self, level: LogLevel, record: &LogRecord) {
        match level {
            LogLevel::Debug => {
                agent_debug!(record.agent, source = %record.source, sockaddr = %record.sockaddr, "{}", record);
            }
            LogLevel::Info => {
                agent_info!(record.agent, source = %record.source, sockaddr = %record.sockaddr, "{}", record);
            }
            LogLevel::Warn => {
                agent_warn!(record.agent, source = %record.source, sockaddr = %record.sockaddr, "{}", record);
            }
            LogLevel::Error => {
                agent_error!(record.agent, source = %record.source, sockaddr = %record.sockaddr, "{}", record);
            }
        }
    }
}
