//! Scenario abstraction consumed by the pre-launch networking hook

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::agent::UserAgent;

/// Orchestrator view of a scenario
///
/// `agents` and `agents_mut` must yield agents in the same order.
pub trait Scenario {
    /// Scenario-wide default host for locally bound sockets
    fn local_host(&self) -> Option<&str>;

    fn agents(&self) -> Box<dyn Iterator<Item = &UserAgent> + '_>;

    fn agents_mut(&mut self) -> Box<dyn Iterator<Item = &mut UserAgent> + '_>;

    /// Effective configuration of an agent with scenario defaults merged in
    fn prepare_agent(&self, ua: &UserAgent) -> UserAgent;
}

/// Defaults applied to every agent that does not override them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentDefaults {
    pub local_host: Option<String>,
    pub srcaddr: Option<SocketAddr>,
    pub mediaaddr: Option<SocketAddr>,
}

/// Plain in-memory scenario: shared defaults plus named agents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SippScenario {
    pub defaults: AgentDefaults,
    pub agents: IndexMap<String, UserAgent>,
}

impl SippScenario {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default local host (fluent API)
    pub fn with_local_host(mut self, host: impl Into<String>) -> Self {
        self.defaults.local_host = Some(host.into());
        self
    }

    /// Set scenario defaults (fluent API)
    pub fn with_defaults(mut self, defaults: AgentDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Add an agent keyed by its name (fluent API)
    pub fn with_agent(mut self, ua: UserAgent) -> Self {
        self.add_agent(ua);
        self
    }

    pub fn add_agent(&mut self, ua: UserAgent) {
        self.agents.insert(ua.name.clone(), ua);
    }

    pub fn agent(&self, name: &str) -> Option<&UserAgent> {
        self.agents.get(name)
    }
}

impl Scenario for SippScenario {
    fn local_host(&self) -> Option<&str> {
        self.defaults.local_host.as_deref()
    }

    fn agents(&self) -> Box<dyn Iterator<Item = &UserAgent> + '_> {
        Box::new(self.agents.values())
    }

    fn agents_mut(&mut self) -> Box<dyn Iterator<Item = &mut UserAgent> + '_> {
        Box::new(self.agents.values_mut())
    }

    fn prepare_agent(&self, ua: &UserAgent) -> UserAgent {
        let mut prepared = ua.clone();
        prepared.srcaddr = ua.srcaddr.or(self.defaults.srcaddr);
        prepared.mediaaddr = ua.mediaaddr.or(self.defaults.mediaaddr);
        prepared
    }
}
