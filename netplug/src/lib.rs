//! Automatic networking for SIPp agents
//!
//! Before a scenario is launched every agent without an explicit source
//! address gets a signaling and a media address probed from the local OS.
//! A probed address is only known to be free at the instant its socket is
//! released; another process may take it before SIPp binds to it.

pub mod config;
pub mod error;
pub mod netplug;
pub mod services;
pub mod traits;

pub use config::{AddressFamily, NetPlugConfig};
pub use error::{NetPlugError, NetPlugResult};
pub use netplug::NetPlug;
pub use services::{allocate, RealSocketAllocator};
pub use traits::{MockSocketAllocator, SocketAllocator};
