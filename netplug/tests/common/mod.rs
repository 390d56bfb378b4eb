//! Common test utilities and infrastructure

pub mod fixtures;

pub use fixtures::TestFixtures;
