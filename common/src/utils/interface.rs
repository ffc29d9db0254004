use std::net::{Ipv4Addr, Ipv6Addr};

use pnet::datalink::MacAddr;

use crate::network::address::AddressRecord;

/// Family filters over the address list of one interface.
pub trait AddressRecordsExt {
    fn ipv4_addrs(&self) -> Vec<Ipv4Addr>;
    fn ipv6_addrs(&self) -> Vec<Ipv6Addr>;
    /// IPv6 addresses left after dropping `fe80:` link-local ones.
    fn routable_ipv6_addrs(&self) -> Vec<Ipv6Addr>;
    fn link_addrs(&self) -> Vec<MacAddr>;
}

impl AddressRecordsExt for [AddressRecord] {
    fn ipv4_addrs(&self) -> Vec<Ipv4Addr> {
        self.iter()
            .filter_map(|record| {
                if let AddressRecord::Ipv4(ipv4) = record {
                    Some(*ipv4)
                } else {
                    None
                }
            })
            .collect()
    }

    fn ipv6_addrs(&self) -> Vec<Ipv6Addr> {
        self.iter()
            .filter_map(|record| {
                if let AddressRecord::Ipv6(ipv6) = record {
                    Some(*ipv6)
                } else {
                    None
                }
            })
            .collect()
    }

    fn routable_ipv6_addrs(&self) -> Vec<Ipv6Addr> {
        self.ipv6_addrs()
            .into_iter()
            .filter(|ipv6| !AddressRecord::Ipv6(*ipv6).is_link_local())
            .collect()
    }

    fn link_addrs(&self) -> Vec<MacAddr> {
        self.iter()
            .filter_map(|record| {
                if let AddressRecord::Link(mac) = record {
                    Some(*mac)
                } else {
                    None
                }
            })
            .collect()
    }
}
