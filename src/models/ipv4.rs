//! IPv4 address and CIDR notation utilities.
//!
//! Provides the [`Ipv4`] CIDR block along with the parsing and bit-mask helpers
//! the subnet calculations are built from.

use super::SubnetInfo;
use crate::error::CidrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Mask bits for an already validated prefix length.
fn mask_bits(len: u8) -> u32 {
    // shifting a u32 by 32 is not defined, /0 has no mask bits
    u32::MAX
        .checked_shl(u32::from(MAX_LENGTH - len))
        .unwrap_or(0)
}

fn prefix_range(len: u8) -> CidrError {
    CidrError::PrefixRange {
        prefix: len.to_string(),
    }
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use cidr_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, CidrError> {
    Ok(u32::from(Ipv4::from_parts(Ipv4Addr::UNSPECIFIED, len)?.netmask()))
}

/// Complement of [`get_cidr_mask`]: the host bits of a prefix length.
pub fn wildcard_mask(len: u8) -> Result<u32, CidrError> {
    Ok(u32::from(Ipv4::from_parts(Ipv4Addr::UNSPECIFIED, len)?.wildcard()))
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CidrError> {
    Ok(Ipv4::from_parts(addr, len)?.lo())
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CidrError> {
    Ok(Ipv4::from_parts(addr, len)?.hi())
}

/// Number of usable host addresses for a prefix length, see [`Ipv4::num_hosts`].
pub fn num_hosts(len: u8) -> Result<u64, CidrError> {
    Ok(Ipv4::from_parts(Ipv4Addr::UNSPECIFIED, len)?.num_hosts())
}

fn total_addresses(len: u8) -> u64 {
    1u64 << (MAX_LENGTH - len)
}

/// Digits only, and no leading zero unless the number is `0` itself.
fn is_plain_decimal(s: &str) -> bool {
    !s.is_empty()
        && s.bytes().all(|b| b.is_ascii_digit())
        && (s.len() == 1 || !s.starts_with('0'))
}

fn parse_octet(octet: &str) -> Result<u8, CidrError> {
    if !is_plain_decimal(octet) {
        return Err(CidrError::NonNumericOctet {
            octet: octet.to_string(),
        });
    }
    // only digits left, so the parse can fail on overflow alone
    octet.parse().map_err(|_| CidrError::OctetRange {
        octet: octet.to_string(),
    })
}

/// Parse a dotted-decimal address, most significant octet first.
///
/// Stricter than [`Ipv4Addr::from_str`] in what it reports: each failure maps
/// to its own [`CidrError`] variant.
pub fn parse_addr(address: &str) -> Result<Ipv4Addr, CidrError> {
    let parts: Vec<&str> = address.split('.').collect();
    if parts.len() != 4 {
        return Err(CidrError::WrongOctetCount {
            address: address.to_string(),
            found: parts.len(),
        });
    }
    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(&parts) {
        *octet = parse_octet(part)?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Parse a prefix length in the range 0-32.
pub fn parse_prefix(prefix: &str) -> Result<u8, CidrError> {
    if !is_plain_decimal(prefix) {
        return Err(CidrError::NonNumericPrefix {
            prefix: prefix.to_string(),
        });
    }
    let out_of_range = || CidrError::PrefixRange {
        prefix: prefix.to_string(),
    };
    let len: u8 = prefix.parse().map_err(|_| out_of_range())?;
    if len > MAX_LENGTH {
        return Err(out_of_range());
    }
    Ok(len)
}

/// IPv4 address with CIDR notation support.
///
/// The address keeps its host bits, `10.0.0.5/24` stays `10.0.0.5/24`. Only
/// the validating constructors build one, so `mask` is always in 0-32.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    addr: Ipv4Addr,
    mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// Surrounding whitespace is ignored. The address is checked before the
    /// prefix, and the first failure is returned.
    pub fn new(addr_cidr: &str) -> Result<Ipv4, CidrError> {
        let addr_cidr = addr_cidr.trim();
        let malformed = || CidrError::MalformedInput {
            input: addr_cidr.to_string(),
        };
        let (addr, len) = addr_cidr.split_once('/').ok_or_else(malformed)?;
        if addr.is_empty() || len.is_empty() || len.contains('/') {
            return Err(malformed());
        }
        let addr = parse_addr(addr)?;
        let mask = parse_prefix(len)?;
        Ok(Ipv4 { addr, mask })
    }

    /// Build a block from an address and a prefix length.
    pub fn from_parts(addr: Ipv4Addr, len: u8) -> Result<Ipv4, CidrError> {
        if len > MAX_LENGTH {
            return Err(prefix_range(len));
        }
        Ok(Ipv4 { addr, mask: len })
    }

    /// The address as given, host bits included.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Subnet mask in dotted form.
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(mask_bits(self.mask))
    }

    /// Wildcard (inverse) mask in dotted form.
    pub fn wildcard(&self) -> Ipv4Addr {
        Ipv4Addr::from(!u32::from(self.netmask()))
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & u32::from(self.netmask()))
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.lo()) | u32::from(self.wildcard()))
    }

    /// The block with host bits cleared.
    pub fn network(&self) -> Ipv4 {
        Ipv4 {
            addr: self.lo(),
            mask: self.mask,
        }
    }

    /// First address assignable to a host.
    pub fn first_host(&self) -> Ipv4Addr {
        match self.mask {
            32 => self.addr,
            31 => self.lo(),
            // a /30 or shorter has at least two host bits, no overflow
            _ => Ipv4Addr::from(u32::from(self.lo()) + 1),
        }
    }

    /// Last address assignable to a host.
    pub fn last_host(&self) -> Ipv4Addr {
        match self.mask {
            32 => self.addr,
            31 => self.hi(),
            _ => Ipv4Addr::from(u32::from(self.hi()) - 1),
        }
    }

    /// Number of usable host addresses.
    ///
    /// A /32 is a single host and a /31 is a point-to-point link with both
    /// addresses usable. Shorter prefixes lose the network and broadcast address.
    pub fn num_hosts(&self) -> u64 {
        match self.mask {
            32 => 1,
            31 => 2,
            len => total_addresses(len).saturating_sub(2),
        }
    }

    /// Every address in the block, network and broadcast included.
    pub fn size(&self) -> u64 {
        total_addresses(self.mask)
    }

    /// Check if an IP address is contained within this subnet.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.lo() && ip <= self.hi()
    }

    /// Derive all the subnet properties of this block.
    pub fn subnet_info(&self) -> SubnetInfo {
        SubnetInfo::from(*self)
    }
}

impl FromStr for Ipv4 {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(1).unwrap(), 0x80000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(31).unwrap(), 0xFFFFFFFE);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert_eq!(
            get_cidr_mask(33).unwrap_err(),
            CidrError::PrefixRange {
                prefix: "33".to_string()
            }
        );
    }

    #[test]
    fn test_wildcard_mask() {
        assert_eq!(wildcard_mask(0).unwrap(), 0xFFFFFFFF);
        assert_eq!(wildcard_mask(24).unwrap(), 0x000000FF);
        assert_eq!(wildcard_mask(32).unwrap(), 0);
        assert!(wildcard_mask(40).is_err());
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 8).unwrap(), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), Ipv4Addr::new(192, 168, 1, 42));
        assert_eq!(cut_addr(ip, 0).unwrap(), Ipv4Addr::new(0, 0, 0, 0));
        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 16).unwrap(),
            Ipv4Addr::new(192, 168, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 32).unwrap(),
            Ipv4Addr::new(192, 168, 1, 0)
        );
        assert_eq!(broadcast_addr(ip, 0).unwrap(), Ipv4Addr::BROADCAST);
        assert!(broadcast_addr(Ipv4Addr::BROADCAST, 24).is_ok());
    }

    #[test]
    fn test_num_hosts() {
        assert_eq!(num_hosts(0).unwrap(), 4294967294); // 2^32 - 2
        assert_eq!(num_hosts(8).unwrap(), 16777214);
        assert_eq!(num_hosts(16).unwrap(), 65534);
        assert_eq!(num_hosts(24).unwrap(), 254);
        assert_eq!(num_hosts(29).unwrap(), 6);
        assert_eq!(num_hosts(30).unwrap(), 2);
        assert_eq!(num_hosts(31).unwrap(), 2); // point-to-point
        assert_eq!(num_hosts(32).unwrap(), 1);
        assert!(num_hosts(33).is_err());
    }

    #[test]
    fn test_free_helpers_match_block_methods() {
        let addr = Ipv4Addr::new(198, 51, 100, 77);
        for len in 0..=MAX_LENGTH {
            let block = Ipv4::from_parts(addr, len).unwrap();
            assert_eq!(num_hosts(len).unwrap(), block.num_hosts(), "/{len}");
            assert_eq!(get_cidr_mask(len).unwrap(), u32::from(block.netmask()));
            assert_eq!(wildcard_mask(len).unwrap(), u32::from(block.wildcard()));
            assert_eq!(cut_addr(addr, len).unwrap(), block.lo());
            assert_eq!(broadcast_addr(addr, len).unwrap(), block.hi());
        }
        assert!(num_hosts(MAX_LENGTH + 1).is_err());
    }

    #[test]
    fn test_parse_addr() {
        assert_eq!(
            parse_addr("192.168.1.10").unwrap(),
            Ipv4Addr::new(192, 168, 1, 10)
        );
        assert_eq!(parse_addr("0.0.0.0").unwrap(), Ipv4Addr::UNSPECIFIED);
        assert_eq!(
            parse_addr("255.255.255.255").unwrap(),
            Ipv4Addr::BROADCAST
        );
        assert_eq!(
            parse_addr("10.0.0").unwrap_err(),
            CidrError::WrongOctetCount {
                address: "10.0.0".to_string(),
                found: 3
            }
        );
        assert!(matches!(
            parse_addr("1.2.3.4.5"),
            Err(CidrError::WrongOctetCount { found: 5, .. })
        ));
        assert!(matches!(
            parse_addr("10.0.0."),
            Err(CidrError::NonNumericOctet { .. })
        ));
    }

    #[test]
    fn test_parse_octet_rejects() {
        for bad in ["", "a", "1a", "+1", "-1", " 1", "1 ", "0x1", "1.5", "١"] {
            assert_eq!(
                parse_octet(bad).unwrap_err(),
                CidrError::NonNumericOctet {
                    octet: bad.to_string()
                },
                "octet {bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_octet_leading_zero() {
        assert_eq!(parse_octet("0").unwrap(), 0);
        assert!(matches!(
            parse_octet("00"),
            Err(CidrError::NonNumericOctet { .. })
        ));
        assert!(matches!(
            parse_octet("001"),
            Err(CidrError::NonNumericOctet { .. })
        ));
    }

    #[test]
    fn test_parse_octet_range() {
        assert_eq!(parse_octet("255").unwrap(), 255);
        assert!(matches!(
            parse_octet("256"),
            Err(CidrError::OctetRange { .. })
        ));
        // too big for any integer, still a range problem
        assert!(matches!(
            parse_octet("99999999999999999999999"),
            Err(CidrError::OctetRange { .. })
        ));
    }

    #[test]
    fn test_parse_prefix() {
        assert_eq!(parse_prefix("0").unwrap(), 0);
        assert_eq!(parse_prefix("32").unwrap(), 32);
        assert!(matches!(
            parse_prefix("33"),
            Err(CidrError::PrefixRange { .. })
        ));
        assert!(matches!(
            parse_prefix("1000"),
            Err(CidrError::PrefixRange { .. })
        ));
        assert!(matches!(
            parse_prefix("024"),
            Err(CidrError::NonNumericPrefix { .. })
        ));
        assert!(matches!(
            parse_prefix("x"),
            Err(CidrError::NonNumericPrefix { .. })
        ));
        assert!(matches!(
            parse_prefix("-1"),
            Err(CidrError::NonNumericPrefix { .. })
        ));
    }

    #[test]
    fn test_ipv4_new() {
        let ip = Ipv4::new(" 10.2.3.4/16\n").unwrap();
        assert_eq!(ip.addr(), Ipv4Addr::new(10, 2, 3, 4));
        assert_eq!(ip.mask(), 16);
        assert_eq!(ip.to_string(), "10.2.3.4/16");
        assert_eq!("10.2.3.4/16".parse::<Ipv4>().unwrap(), ip);

        for bad in ["10.0.0.1", "/24", "10.0.0.1/", "10.0.0.1/24/8", "", "/"] {
            assert!(
                matches!(Ipv4::new(bad), Err(CidrError::MalformedInput { .. })),
                "input {bad:?}"
            );
        }
        // address errors win over prefix errors
        assert!(matches!(
            Ipv4::new("256.0.0.1/40"),
            Err(CidrError::OctetRange { .. })
        ));
    }

    #[test]
    fn test_from_parts() {
        let ip = Ipv4::from_parts(Ipv4Addr::new(10, 1, 1, 7), 28).unwrap();
        assert_eq!(ip, Ipv4::new("10.1.1.7/28").unwrap());
        assert!(Ipv4::from_parts(Ipv4Addr::LOCALHOST, 33).is_err());
    }

    #[test]
    fn test_block_bounds() {
        let ip = Ipv4::new("10.18.126.77/24").unwrap();
        assert_eq!(ip.lo(), Ipv4Addr::new(10, 18, 126, 0));
        assert_eq!(ip.hi(), Ipv4Addr::new(10, 18, 126, 255));
        assert_eq!(ip.first_host(), Ipv4Addr::new(10, 18, 126, 1));
        assert_eq!(ip.last_host(), Ipv4Addr::new(10, 18, 126, 254));
        assert_eq!(ip.netmask(), Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(ip.wildcard(), Ipv4Addr::new(0, 0, 0, 255));
        assert_eq!(ip.network(), Ipv4::new("10.18.126.0/24").unwrap());
        assert_eq!(ip.size(), 256);
        assert_eq!(ip.num_hosts(), 254);

        let all = Ipv4::new("0.0.0.0/0").unwrap();
        assert_eq!(all.size(), 1 << 32);
        assert_eq!(all.last_host(), Ipv4Addr::new(255, 255, 255, 254));
    }

    #[test]
    fn test_contains() {
        let net = Ipv4::new("10.0.0.0/8").unwrap();
        assert!(net.contains(Ipv4Addr::new(10, 255, 255, 255)));
        assert!(net.contains(Ipv4Addr::new(10, 0, 0, 0)));
        assert!(!net.contains(Ipv4Addr::new(11, 0, 0, 0)));
        assert!(!net.contains(Ipv4Addr::new(9, 255, 255, 255)));
    }

    #[test]
    fn test_ip4_cmp() {
        let ip1 = Ipv4::new("10.0.0.1/24").unwrap();
        let ip2 = Ipv4::new("10.0.0.2/24").unwrap();
        let ip3 = Ipv4::new("10.0.0.1/24").unwrap();

        assert!(ip1 < ip2);
        assert!(ip1 == ip3);
        assert!(ip2 > ip1);
        assert!(ip2 >= ip3);
    }

    #[test]
    fn test_serde() {
        let ip = Ipv4::new("172.16.5.4/12").unwrap();
        let json = serde_json::to_string(&ip).unwrap();
        assert_eq!(json, r#""172.16.5.4/12""#);
        let back: Ipv4 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ip);

        let err = serde_json::from_str::<Ipv4>(r#""172.16.5.4/99""#).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
