//! Service implementations
//!
//! Real implementations of the service traits, backed by the OS resolver
//! and socket layer.

pub mod socket_allocator;

#[cfg(test)]
mod tests;

pub use socket_allocator::{allocate, RealSocketAllocator};
