//! Trait definitions with mockall annotations for testing

use std::net::SocketAddr;

use crate::config::AddressFamily;
use crate::error::NetPlugResult;

/// Source of ephemeral local socket addresses
#[mockall::automock]
pub trait SocketAllocator {
    /// Probe a currently unused address on `host`
    ///
    /// # Parameters
    /// - `host`: hostname or IP literal to bind on
    /// - `family`: address family to resolve
    /// - `port`: port hint, 0 for an OS-chosen port
    fn allocate(&self, host: &str, family: AddressFamily, port: u16) -> NetPlugResult<SocketAddr>;

    /// Fully-qualified domain name of the local machine
    fn local_fqdn(&self) -> NetPlugResult<String>;
}
