//! OS-backed socket address probing
//!
//! Resolves the bind host passively for datagram sockets, binds a throwaway
//! socket on the first candidate and reads back the address the OS picked.

use dns_lookup::AddrInfoHints;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;

use crate::config::AddressFamily;
use crate::error::{NetPlugError, NetPlugResult};
use crate::traits::SocketAllocator;

/// Socket allocator using the local resolver and kernel port assignment
#[derive(Debug, Clone, Copy, Default)]
pub struct RealSocketAllocator;

impl RealSocketAllocator {
    pub fn new() -> Self {
        Self
    }
}

impl SocketAllocator for RealSocketAllocator {
    fn allocate(&self, host: &str, family: AddressFamily, port: u16) -> NetPlugResult<SocketAddr> {
        let candidate = first_candidate(host, family, port)?;

        let protocol = (candidate.protocol != 0).then(|| Protocol::from(candidate.protocol));
        let socket = Socket::new(Domain::for_address(candidate.sockaddr), Type::DGRAM, protocol)
            .map_err(|source| NetPlugError::Socket {
                address: candidate.sockaddr,
                source,
            })?;

        socket
            .bind(&candidate.sockaddr.into())
            .map_err(|source| NetPlugError::Socket {
                address: candidate.sockaddr,
                source,
            })?;

        let local = socket
            .local_addr()
            .map_err(|source| NetPlugError::Socket {
                address: candidate.sockaddr,
                source,
            })?
            .as_socket()
            .ok_or_else(|| NetPlugError::Socket {
                address: candidate.sockaddr,
                source: io::Error::new(io::ErrorKind::InvalidData, "bound socket has no inet address"),
            })?;

        // Released here: the address is only a hint from now on
        drop(socket);

        tracing::debug!("🔌 Probed free address {} on '{}'", local, host);
        Ok(local)
    }

    fn local_fqdn(&self) -> NetPlugResult<String> {
        let hostname = hostname::get()
            .map_err(|source| NetPlugError::LocalHostname { source })?
            .into_string()
            .map_err(|raw| NetPlugError::LocalHostname {
                source: io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("hostname is not valid UTF-8: {raw:?}"),
                ),
            })?;

        Ok(canonical_name(&hostname).unwrap_or(hostname))
    }
}

/// Probe a free address with the default allocator
pub fn allocate(host: &str, family: AddressFamily, port: u16) -> NetPlugResult<SocketAddr> {
    RealSocketAllocator.allocate(host, family, port)
}

fn first_candidate(host: &str, family: AddressFamily, port: u16) -> NetPlugResult<dns_lookup::AddrInfo> {
    let hints = AddrInfoHints {
        socktype: libc::SOCK_DGRAM,
        protocol: 0,
        address: family.as_raw(),
        flags: libc::AI_PASSIVE,
    };
    let service = port.to_string();

    let mut candidates = dns_lookup::getaddrinfo(Some(host), Some(&service), Some(hints)).map_err(|e| {
        NetPlugError::AddressResolution {
            host: host.to_string(),
            source: io::Error::from(e),
        }
    })?;

    match candidates.next() {
        Some(candidate) => candidate.map_err(|source| NetPlugError::AddressResolution {
            host: host.to_string(),
            source,
        }),
        None => Err(NetPlugError::EmptyResolution { host: host.to_string() }),
    }
}

/// First dotted canonical name the resolver reports for `hostname`
fn canonical_name(hostname: &str) -> Option<String> {
    let hints = AddrInfoHints {
        socktype: 0,
        protocol: 0,
        address: libc::AF_UNSPEC,
        flags: libc::AI_CANONNAME,
    };

    dns_lookup::getaddrinfo(Some(hostname), None, Some(hints))
        .ok()?
        .filter_map(Result::ok)
        .filter_map(|info| info.canonname)
        .find(|name| name.contains('.'))
}
