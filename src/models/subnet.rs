//! Derived subnet properties.

use super::Ipv4;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything the calculator derives from one CIDR block.
///
/// Built once from an [`Ipv4`] and read through accessors only. Addresses
/// serialize and display in dotted-decimal form.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubnetInfo {
    cidr: Ipv4,
    address: Ipv4Addr,
    prefix_len: u8,
    network: Ipv4Addr,
    broadcast: Ipv4Addr,
    first_usable: Ipv4Addr,
    last_usable: Ipv4Addr,
    subnet_mask: Ipv4Addr,
    wildcard_mask: Ipv4Addr,
    usable_hosts: u64,
    total_addresses: u64,
}

impl From<Ipv4> for SubnetInfo {
    fn from(block: Ipv4) -> Self {
        SubnetInfo {
            cidr: block.network(),
            address: block.addr(),
            prefix_len: block.mask(),
            network: block.lo(),
            broadcast: block.hi(),
            first_usable: block.first_host(),
            last_usable: block.last_host(),
            subnet_mask: block.netmask(),
            wildcard_mask: block.wildcard(),
            usable_hosts: block.num_hosts(),
            total_addresses: block.size(),
        }
    }
}

impl SubnetInfo {
    /// The address that was entered, host bits included.
    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn network(&self) -> Ipv4Addr {
        self.network
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        self.broadcast
    }

    pub fn first_usable(&self) -> Ipv4Addr {
        self.first_usable
    }

    pub fn last_usable(&self) -> Ipv4Addr {
        self.last_usable
    }

    pub fn subnet_mask(&self) -> Ipv4Addr {
        self.subnet_mask
    }

    pub fn wildcard_mask(&self) -> Ipv4Addr {
        self.wildcard_mask
    }

    /// Hosts that can be assigned; /31 and /32 keep every address.
    pub fn usable_hosts(&self) -> u64 {
        self.usable_hosts
    }

    /// Size of the block, network and broadcast included.
    pub fn total_addresses(&self) -> u64 {
        self.total_addresses
    }

    /// The normalized block, `network/prefix`.
    pub fn cidr(&self) -> Ipv4 {
        self.cidr
    }
}
