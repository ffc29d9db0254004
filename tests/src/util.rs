use netprobe_common::network::address::AddressRecord;
use pnet::datalink::MacAddr;
use std::net::{Ipv4Addr, Ipv6Addr};

pub fn v4(a: u8, b: u8, c: u8, d: u8) -> AddressRecord {
    AddressRecord::Ipv4(Ipv4Addr::new(a, b, c, d))
}

pub fn v6(s: &str) -> AddressRecord {
    AddressRecord::Ipv6(s.parse::<Ipv6Addr>().unwrap())
}

pub fn mac(a: u8, b: u8, c: u8, d: u8, e: u8, f: u8) -> AddressRecord {
    AddressRecord::Link(MacAddr::new(a, b, c, d, e, f))
}
