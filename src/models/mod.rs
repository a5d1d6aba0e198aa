//! Domain models for the CIDR calculator.
//!
//! - [`Ipv4`] - IPv4 address with CIDR notation support
//! - [`SubnetInfo`] - subnet properties derived from an [`Ipv4`] block

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, num_hosts, parse_addr, parse_prefix, wildcard_mask,
    Ipv4, MAX_LENGTH,
};
pub use subnet::SubnetInfo;
