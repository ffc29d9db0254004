use pnet::datalink::{self, NetworkInterface};

use netprobe_common::error::LookupError;
use netprobe_common::network::address::AddressRecord;
use netprobe_common::network::interface::{Interface, InterfaceProvider};

/// Interface table of the running host, read through `pnet::datalink`.
///
/// Holds no state: every call re-reads the table from the OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInterfaces;

impl InterfaceProvider for SystemInterfaces {
    fn interfaces(&self) -> Vec<Interface> {
        datalink::interfaces()
            .into_iter()
            .map(|interface| Interface::new(interface.name))
            .collect()
    }

    fn addresses(&self, interface: &Interface) -> Result<Vec<AddressRecord>, LookupError> {
        datalink::interfaces()
            .iter()
            .find(|candidate| candidate.name == interface.name)
            .map(address_records)
            .ok_or_else(|| LookupError::Vanished {
                name: interface.name.clone(),
            })
    }
}

/// Flattens the IP networks and hardware address of a pnet interface.
fn address_records(interface: &NetworkInterface) -> Vec<AddressRecord> {
    let mut records: Vec<AddressRecord> = interface
        .ips
        .iter()
        .map(|net| AddressRecord::from(net.ip()))
        .collect();

    if let Some(mac) = interface.mac {
        records.push(AddressRecord::Link(mac));
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use pnet::datalink::MacAddr;
    use pnet::ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn address_records_flatten_networks_and_mac() {
        let mac = MacAddr::new(0x34, 0xcf, 0xf6, 0x9a, 0x11, 0x22);
        let ipv6 = "fe80::36cf:f6ff:fe9a:1122".parse::<Ipv6Addr>().unwrap();
        let iface = NetworkInterface {
            name: "wlan0".to_string(),
            description: "".to_string(),
            index: 3,
            mac: Some(mac),
            ips: vec![
                IpNetwork::V4(Ipv4Network::new(Ipv4Addr::new(192, 168, 1, 42), 24).unwrap()),
                IpNetwork::V6(Ipv6Network::new(ipv6, 64).unwrap()),
            ],
            flags: 0,
        };

        assert_eq!(
            address_records(&iface),
            vec![
                AddressRecord::Ipv4(Ipv4Addr::new(192, 168, 1, 42)),
                AddressRecord::Ipv6(ipv6),
                AddressRecord::Link(mac),
            ]
        );
    }

    #[test]
    fn address_records_without_mac() {
        let iface = NetworkInterface {
            name: "tun0".to_string(),
            description: "".to_string(),
            index: 5,
            mac: None,
            ips: vec![IpNetwork::V4(Ipv4Network::new(Ipv4Addr::new(10, 96, 0, 57), 16).unwrap())],
            flags: 0,
        };

        assert_eq!(
            address_records(&iface),
            vec![AddressRecord::Ipv4(Ipv4Addr::new(10, 96, 0, 57))]
        );
    }

    #[test]
    fn unknown_interface_is_reported_as_vanished() {
        let ghost = Interface::new("netprobe-test-ghost0");
        assert_eq!(
            SystemInterfaces.addresses(&ghost),
            Err(LookupError::Vanished {
                name: "netprobe-test-ghost0".to_string()
            })
        );
    }

    #[test]
    fn enumerating_the_host_does_not_panic() {
        // Smoke test against the real OS table; contents depend on the machine.
        for iface in SystemInterfaces.interfaces() {
            println!("{iface}: {:?}", SystemInterfaces.addresses(&iface));
        }
    }
}
