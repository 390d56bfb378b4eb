//! Scenario fixtures shared by the networking integration tests

use shared::{SippScenario, UserAgent};
use std::net::SocketAddr;

pub struct TestFixtures;

impl TestFixtures {
    pub const LOOPBACK: &'static str = "127.0.0.1";

    pub fn preset_srcaddr() -> SocketAddr {
        "10.0.0.5:5060".parse().unwrap()
    }

    /// UAS with an explicit address and a UAC left for auto-networking
    pub fn mixed_scenario() -> SippScenario {
        SippScenario::new()
            .with_local_host(Self::LOOPBACK)
            .with_agent(UserAgent::new("uas").with_srcaddr(Self::preset_srcaddr()))
            .with_agent(UserAgent::new("uac"))
    }

    pub fn unconfigured_scenario(agent_count: usize) -> SippScenario {
        (0..agent_count).fold(SippScenario::new().with_local_host(Self::LOOPBACK), |scen, i| {
            scen.with_agent(UserAgent::new(format!("agent_{i}")))
        })
    }
}
