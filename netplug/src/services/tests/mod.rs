//! Service-specific tests

mod socket_allocator;
