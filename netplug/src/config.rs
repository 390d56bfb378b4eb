//! Networking plugin configuration

use serde::{Deserialize, Serialize};
use std::fmt;

/// Address family used when resolving the bind host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    #[default]
    V4,
    V6,
}

impl AddressFamily {
    /// Raw `AF_*` value for resolver hints
    pub fn as_raw(&self) -> i32 {
        match self {
            AddressFamily::V4 => libc::AF_INET,
            AddressFamily::V6 => libc::AF_INET6,
        }
    }

    pub fn matches(&self, addr: &std::net::SocketAddr) -> bool {
        match self {
            AddressFamily::V4 => addr.is_ipv4(),
            AddressFamily::V6 => addr.is_ipv6(),
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::V4 => write!(f, "ipv4"),
            AddressFamily::V6 => write!(f, "ipv6"),
        }
    }
}

/// How agent addresses are probed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetPlugConfig {
    pub family: AddressFamily,
    /// Port hint, 0 lets the OS choose
    pub port: u16,
}

impl NetPlugConfig {
    /// Set address family (fluent API)
    pub fn with_family(mut self, family: AddressFamily) -> Self {
        self.family = family;
        self
    }

    /// Set port hint (fluent API)
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}
