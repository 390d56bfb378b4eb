//! Networking plugin error types

use std::net::SocketAddr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetPlugError {
    #[error("Address resolution failed for '{host}': {source}")]
    AddressResolution {
        host: String,
        #[source]
        source: std::io::Error,
    },

    #[error("getaddrinfo returned empty sequence for '{host}'")]
    EmptyResolution { host: String },

    #[error("Socket probe failed on {address}: {source}")]
    Socket {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Local hostname lookup failed: {source}")]
    LocalHostname {
        #[source]
        source: std::io::Error,
    },
}

pub type NetPlugResult<T> = Result<T, NetPlugError>;
