//! Pre-launch hook assigning socket addresses to scenario agents

use shared::{agent_debug, agent_info, Scenario};
use std::net::SocketAddr;

use crate::config::NetPlugConfig;
use crate::error::NetPlugResult;
use crate::services::RealSocketAllocator;
use crate::traits::SocketAllocator;

/// Networking plugin, generic over the address source for testability
pub struct NetPlug<A: SocketAllocator = RealSocketAllocator> {
    allocator: A,
    config: NetPlugConfig,
}

impl NetPlug<RealSocketAllocator> {
    /// Create plugin backed by the local OS
    pub fn new() -> Self {
        Self::with_allocator(RealSocketAllocator::new())
    }
}

impl Default for NetPlug<RealSocketAllocator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: SocketAllocator> NetPlug<A> {
    pub fn with_allocator(allocator: A) -> Self {
        Self {
            allocator,
            config: NetPlugConfig::default(),
        }
    }

    /// Configure probing (fluent API)
    pub fn with_config(mut self, config: NetPlugConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &NetPlugConfig {
        &self.config
    }

    /// Give every agent lacking a source address a fresh signaling and
    /// media address
    ///
    /// Agents whose prepared view already carries a source address (set on
    /// the agent or inherited from scenario defaults) are left untouched.
    /// Addresses are assigned in pairs: an agent either gets both or none.
    pub fn assign_scenario_addresses<S: Scenario + ?Sized>(&self, scen: &mut S) -> NetPlugResult<()> {
        let host = match scen.local_host().filter(|host| !host.is_empty()) {
            Some(host) => host.to_string(),
            None => self.allocator.local_fqdn()?,
        };

        let pending: Vec<bool> = scen
            .agents()
            .map(|ua| scen.prepare_agent(ua).srcaddr.is_none())
            .collect();

        for (ua, needs_addresses) in scen.agents_mut().zip(pending) {
            if !needs_addresses {
                agent_debug!(ua.name, "Keeping configured source address {}", ua.sockaddr());
                continue;
            }

            let srcaddr = self.probe(&host)?;
            let mediaaddr = self.probe(&host)?;
            ua.srcaddr = Some(srcaddr);
            ua.mediaaddr = Some(mediaaddr);

            agent_info!(
                ua.name,
                "📍 Assigned signaling {} and media {} on '{}'",
                srcaddr,
                mediaaddr,
                host
            );
        }

        Ok(())
    }

    fn probe(&self, host: &str) -> NetPlugResult<SocketAddr> {
        self.allocator.allocate(host, self.config.family, self.config.port)
    }
}
