use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use pnet::datalink::MacAddr;

/// Textual prefix of IPv6 link-local addresses.
pub const LINK_LOCAL_PREFIX: &str = "fe80:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
    /// Hardware (MAC) address.
    Link,
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AddressFamily::Ipv4 => "IPv4",
            AddressFamily::Ipv6 => "IPv6",
            AddressFamily::Link => "MAC",
        };
        f.write_str(name)
    }
}

/// An address bound to an interface, tagged by its family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressRecord {
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    Link(MacAddr),
}

impl AddressRecord {
    pub fn family(&self) -> AddressFamily {
        match self {
            AddressRecord::Ipv4(_) => AddressFamily::Ipv4,
            AddressRecord::Ipv6(_) => AddressFamily::Ipv6,
            AddressRecord::Link(_) => AddressFamily::Link,
        }
    }

    /// Whether this is an IPv6 address whose text starts with `fe80:`.
    ///
    /// Matches on the canonical textual form rather than the `fe80::/10`
    /// block, so `fe90::1` is not considered link-local here.
    pub fn is_link_local(&self) -> bool {
        match self {
            AddressRecord::Ipv6(addr) => addr.to_string().starts_with(LINK_LOCAL_PREFIX),
            _ => false,
        }
    }
}

impl From<IpAddr> for AddressRecord {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => AddressRecord::Ipv4(v4),
            IpAddr::V6(v6) => AddressRecord::Ipv6(v6),
        }
    }
}

impl From<Ipv4Addr> for AddressRecord {
    fn from(ip: Ipv4Addr) -> Self {
        AddressRecord::Ipv4(ip)
    }
}

impl From<Ipv6Addr> for AddressRecord {
    fn from(ip: Ipv6Addr) -> Self {
        AddressRecord::Ipv6(ip)
    }
}

impl From<MacAddr> for AddressRecord {
    fn from(mac: MacAddr) -> Self {
        AddressRecord::Link(mac)
    }
}

impl fmt::Display for AddressRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressRecord::Ipv4(addr) => fmt::Display::fmt(addr, f),
            AddressRecord::Ipv6(addr) => fmt::Display::fmt(addr, f),
            AddressRecord::Link(mac) => fmt::Display::fmt(mac, f),
        }
    }
}
