use std::net::Ipv6Addr;

use colored::*;

use netprobe_common::config::Criterion;
use netprobe_common::network::address::AddressRecord;
use netprobe_common::network::interface::Interface;
use netprobe_core::probe;
use netprobe_core::snapshot::Lookup;

use crate::terminal::{colors, print};

/// Short label for an IPv6 address class.
pub fn ipv6_to_type_str(ipv6_addr: &Ipv6Addr) -> &'static str {
    if is_global_unicast(ipv6_addr) {
        return "GUA";
    }
    if ipv6_addr.is_unique_local() {
        return "ULA";
    }
    if ipv6_addr.is_unicast_link_local() {
        return "LLA";
    }
    "IPv6"
}

/// 2000::/3
fn is_global_unicast(ipv6_addr: &Ipv6Addr) -> bool {
    let first_byte = ipv6_addr.octets()[0];
    (0x20..=0x3F).contains(&first_byte)
}

pub fn to_key_value_pair(records: &[AddressRecord]) -> Vec<(String, ColoredString)> {
    records
        .iter()
        .map(|record| match record {
            AddressRecord::Ipv4(ipv4_addr) => (
                record.family().to_string(),
                ipv4_addr.to_string().color(colors::IPV4_ADDR),
            ),
            AddressRecord::Ipv6(ipv6_addr) => (
                ipv6_to_type_str(ipv6_addr).to_string(),
                ipv6_addr.to_string().color(colors::IPV6_ADDR),
            ),
            AddressRecord::Link(mac_addr) => (
                record.family().to_string(),
                mac_addr.to_string().color(colors::MAC_ADDR),
            ),
        })
        .collect()
}

pub fn print_interface(idx: usize, interface: &Interface, lookup: &Lookup, criterion: Criterion) {
    let note = if !probe::is_considered(criterion, interface) {
        Some("loopback, ignored")
    } else if lookup.is_err() {
        Some("lookup failed, skipped")
    } else {
        None
    };
    print::tree_head(idx, &interface.name, note);

    let key_value_pair = match lookup {
        Ok(records) if records.is_empty() => {
            vec![("None".to_string(), "no addresses".color(colors::MUTED))]
        }
        Ok(records) => to_key_value_pair(records),
        Err(e) => vec![("Error".to_string(), e.to_string().color(colors::ERROR))],
    };
    print::as_tree_one_level(key_value_pair);
}
