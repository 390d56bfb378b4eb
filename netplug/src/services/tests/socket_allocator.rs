//! Tests for RealSocketAllocator against the local OS
//!
//! Only loopback hosts are used so the tests run without external DNS.

use std::net::{SocketAddr, UdpSocket};

use crate::config::AddressFamily;
use crate::error::NetPlugError;
use crate::services::socket_allocator::{allocate, RealSocketAllocator};
use crate::traits::SocketAllocator;

#[test]
fn test_allocate_ipv4_loopback() {
    let addr = RealSocketAllocator::new()
        .allocate("127.0.0.1", AddressFamily::V4, 0)
        .unwrap();

    assert!(addr.is_ipv4(), "Should resolve to an IPv4 address");
    assert_eq!(addr.ip().to_string(), "127.0.0.1");
    assert!(addr.port() > 0, "OS should assign a concrete port");
}

#[test]
fn test_allocated_address_is_released() {
    let addr = allocate("127.0.0.1", AddressFamily::V4, 0).unwrap();

    // Nothing holds the probe socket any more, so the consumer can bind it
    let consumer = UdpSocket::bind(addr);
    assert!(consumer.is_ok(), "Probed address {addr} should be bindable");
}

#[test]
fn test_allocate_honours_port_hint() {
    let free = allocate("127.0.0.1", AddressFamily::V4, 0).unwrap();

    let addr = allocate("127.0.0.1", AddressFamily::V4, free.port()).unwrap();
    assert_eq!(addr.port(), free.port());
}

#[test]
fn test_allocate_fails_when_port_is_taken() {
    let holder = UdpSocket::bind("127.0.0.1:0").unwrap();
    let taken = holder.local_addr().unwrap();

    let err = allocate("127.0.0.1", AddressFamily::V4, taken.port()).unwrap_err();
    match err {
        NetPlugError::Socket { address, .. } => assert_eq!(address, taken),
        other => panic!("Expected socket error, got {other:?}"),
    }
}

#[test]
fn test_allocate_rejects_family_mismatch() {
    // An IPv6 literal cannot be resolved for AF_INET
    let result = allocate("::1", AddressFamily::V4, 0);
    assert!(matches!(
        result,
        Err(NetPlugError::AddressResolution { .. }) | Err(NetPlugError::EmptyResolution { .. })
    ));
}

#[test]
fn test_allocate_unresolvable_host() {
    let result = allocate("no-such-host.invalid", AddressFamily::V4, 0);
    match result {
        Err(NetPlugError::AddressResolution { host, .. }) => assert_eq!(host, "no-such-host.invalid"),
        Err(NetPlugError::EmptyResolution { host }) => assert_eq!(host, "no-such-host.invalid"),
        other => panic!("Expected resolution failure, got {other:?}"),
    }
}

#[test]
fn test_sequential_allocations_are_well_formed() {
    // Uniqueness is not guaranteed, only validity
    let addrs: Vec<SocketAddr> = (0..5)
        .map(|_| allocate("127.0.0.1", AddressFamily::V4, 0).unwrap())
        .collect();

    for addr in addrs {
        assert!(addr.is_ipv4());
        assert!(addr.port() > 0);
    }
}

#[test]
fn test_local_fqdn_is_not_empty() {
    let fqdn = RealSocketAllocator::new().local_fqdn().unwrap();
    assert!(!fqdn.is_empty());
}
