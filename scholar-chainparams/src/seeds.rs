//! Peer discovery seeds.

use std::fmt;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};

use serde::{Serialize, Serializer};

/// A DNS seed: a descriptive name and the host to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DnsSeed {
    pub name: &'static str,
    pub host: &'static str,
}

impl DnsSeed {
    pub const fn new(name: &'static str, host: &'static str) -> Self {
        DnsSeed { name, host }
    }
}

/// A hard-coded peer, stored as a 16-byte IPv6 address and port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedSeed {
    pub addr: [u8; 16],
    pub port: u16,
}

impl FixedSeed {
    pub const fn new(addr: [u8; 16], port: u16) -> Self {
        FixedSeed { addr, port }
    }

    /// IPv4-mapped addresses (`::ffff:a.b.c.d`) come back as IPv4.
    pub fn socket_addr(&self) -> SocketAddr {
        let ipv6 = Ipv6Addr::from(self.addr);
        let ip = match ipv6.to_ipv4_mapped() {
            Some(ipv4) => IpAddr::V4(ipv4),
            None => IpAddr::V6(ipv6),
        };
        SocketAddr::new(ip, self.port)
    }
}

impl fmt::Display for FixedSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.socket_addr().fmt(f)
    }
}

impl Serialize for FixedSeed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub(crate) const MAIN_DNS_SEEDS: &[DnsSeed] = &[
    DnsSeed::new("seed.scholarshipcoin.org", "node.scholarshipcoin.org"),
    DnsSeed::new("seed2.scholarshipcoin.org", "node2.scholarshipcoin.org"),
    DnsSeed::new("explorer.scholarshipcoin.org", "pool.scholarshipcoin.org"),
];

// No fixed peers have been published for either public network yet.
pub(crate) const MAIN_FIXED_SEEDS: &[FixedSeed] = &[];
pub(crate) const TEST_FIXED_SEEDS: &[FixedSeed] = &[];
