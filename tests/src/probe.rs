use netprobe_common::config::Criterion;
use netprobe_common::network::interface::Interface;
use netprobe_common::network::status::Status;
use netprobe_core::probe::{self, check_network_status_with};
use netprobe_core::snapshot::Snapshot;

use super::util::{mac, v4, v6};

/*************************************************************
                    Scenarios A through D
**************************************************************/

#[test]
fn scenario_a_ethernet_beside_loopback_is_up() {
    let table = Snapshot::new().with("lo", [v4(127, 0, 0, 1)]).with("eth0", [v4(192, 168, 1, 5)]);
    assert_eq!(check_network_status_with(&table, Criterion::Address), Status::Up);
}

#[test]
fn scenario_b_loopback_only_is_down() {
    let table = Snapshot::new().with("lo", [v4(127, 0, 0, 1)]);
    assert_eq!(check_network_status_with(&table, Criterion::Address), Status::Down);
}

#[test]
fn scenario_c_link_local_only_is_down() {
    let table = Snapshot::new().with("wlan0", [v6("fe80::1")]);
    assert_eq!(check_network_status_with(&table, Criterion::Address), Status::Down);
}

#[test]
fn scenario_d_global_ipv6_is_up() {
    let table = Snapshot::new().with("wlan0", [v6("2001:db8::1")]);
    assert_eq!(check_network_status_with(&table, Criterion::Address), Status::Up);
}

/*************************************************************
                     Classification rules
**************************************************************/

#[test]
fn loopback_never_counts_whatever_it_carries() {
    let table = Snapshot::new()
        .with("lo", [v4(127, 0, 0, 1), v6("::1"), v6("2001:db8::1")])
        .with("lo0", [v4(10, 0, 0, 1)]);
    assert_eq!(check_network_status_with(&table, Criterion::Address), Status::Down);
}

#[test]
fn link_local_across_many_interfaces_is_down() {
    let table = Snapshot::new()
        .with("lo", [v4(127, 0, 0, 1)])
        .with("veth1234", [v6("fe80::1a2b:3cff:fe4d:5e6f"), mac(0x1a, 0x2b, 0x3c, 0x4d, 0x5e, 0x6f)])
        .with("wlan0", [v6("fe80::36cf:f6ff:fe9a:1122")]);
    assert_eq!(check_network_status_with(&table, Criterion::Address), Status::Down);
}

#[test]
fn unique_local_ipv6_counts_as_up() {
    let table = Snapshot::new().with("ipv6leakintrf0", [v6("fdeb:446c:912d:8da::"), v6("fe80::7f87:ff4a:9ad8:d2f0")]);
    let report = probe::probe(&table, Criterion::Address);
    assert_eq!(report.status, Status::Up);
    assert_eq!(report.interface, Some(Interface::new("ipv6leakintrf0")));
}

#[test]
fn empty_table_is_down() {
    assert_eq!(check_network_status_with(&Snapshot::new(), Criterion::Address), Status::Down);
}

#[test]
fn interface_without_addresses_is_down() {
    let table = Snapshot::new().with("eth0", Vec::<netprobe_common::network::address::AddressRecord>::new());
    assert_eq!(check_network_status_with(&table, Criterion::Address), Status::Down);
}

/*************************************************************
                  Robustness and ordering
**************************************************************/

#[test]
fn failed_lookup_does_not_hide_a_connected_interface() {
    let table = Snapshot::new()
        .with_vanished("usb0")
        .with_unresolvable("tun0", "address table unavailable")
        .with("enp9s0", [v4(192, 168, 0, 32)]);
    assert_eq!(check_network_status_with(&table, Criterion::Address), Status::Up);
}

#[test]
fn only_failed_lookups_is_down() {
    let table = Snapshot::new().with_vanished("usb0").with_unresolvable("tun0", "gone");
    assert_eq!(check_network_status_with(&table, Criterion::Address), Status::Down);
}

#[test]
fn credit_goes_to_first_qualifying_interface() {
    let table = Snapshot::new()
        .with("veth1234", [v6("fe80::1")])
        .with("wlan0", [v4(192, 168, 1, 42)])
        .with("eth1", [v4(10, 0, 0, 15)]);
    assert_eq!(probe::probe(&table, Criterion::Address).interface, Some(Interface::new("wlan0")));
}

#[test]
fn verdict_does_not_depend_on_order() {
    let forward = Snapshot::new()
        .with("wlan0", [v6("fe80::1")])
        .with("eth1", [v4(10, 0, 0, 15)]);
    let reverse = Snapshot::new()
        .with("eth1", [v4(10, 0, 0, 15)])
        .with("wlan0", [v6("fe80::1")]);
    assert_eq!(
        check_network_status_with(&forward, Criterion::Address),
        check_network_status_with(&reverse, Criterion::Address)
    );
}

#[test]
fn repeated_probes_agree() {
    let table = Snapshot::new().with("lo", [v4(127, 0, 0, 1)]).with("br0", [v4(192, 168, 100, 1), v6("fd00:dead:beef::1")]);
    let first = probe::probe(&table, Criterion::Address);
    let second = probe::probe(&table, Criterion::Address);
    assert_eq!(first, second);
}

/*************************************************************
                   Link-layer criterion
**************************************************************/

#[test]
fn link_layer_reports_up_for_unplugged_adapter() {
    let table = Snapshot::new().with("eth0", [mac(0x52, 0x54, 0x00, 0x12, 0x34, 0x56)]);
    assert_eq!(check_network_status_with(&table, Criterion::LinkLayer), Status::Up);
    assert_eq!(check_network_status_with(&table, Criterion::Address), Status::Down);
}

#[test]
fn link_layer_without_any_mac_is_down() {
    let table = Snapshot::new().with("tun0", [v4(10, 96, 0, 57)]);
    assert_eq!(check_network_status_with(&table, Criterion::LinkLayer), Status::Down);
}
