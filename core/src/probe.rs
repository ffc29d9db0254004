//! Connectivity classification.
//!
//! An interface qualifies under [`Criterion::Address`] when it is not a
//! loopback and carries an IPv4 address or an IPv6 address outside `fe80:`.
//! The first qualifying interface, in enumeration order, settles the verdict
//! as [`Status::Up`]; when none qualifies the host is [`Status::Down`].
//!
//! Address lookups that fail are treated as an empty address list. The
//! routine has no error path.

use tracing::debug;

use netprobe_common::config::Criterion;
use netprobe_common::network::address::AddressRecord;
use netprobe_common::network::interface::{Interface, InterfaceProvider};
use netprobe_common::network::status::Status;
use netprobe_common::utils::interface::AddressRecordsExt;

use crate::system::SystemInterfaces;

/// Verdict of one probe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub status: Status,
    /// The interface credited with the `Up` verdict. `None` when `Down`.
    pub interface: Option<Interface>,
}

impl Report {
    fn up(interface: Interface) -> Self {
        Self {
            status: Status::Up,
            interface: Some(interface),
        }
    }

    fn down() -> Self {
        Self {
            status: Status::Down,
            interface: None,
        }
    }
}

/// Classifies the running host with the address criterion.
pub fn check_network_status() -> Status {
    check_network_status_with(&SystemInterfaces, Criterion::Address)
}

pub fn check_network_status_with<P: InterfaceProvider + ?Sized>(
    provider: &P,
    criterion: Criterion,
) -> Status {
    probe(provider, criterion).status
}

/// Runs the classification and names the interface that decided it.
pub fn probe<P: InterfaceProvider + ?Sized>(provider: &P, criterion: Criterion) -> Report {
    let credited = provider
        .interfaces()
        .into_iter()
        .filter(|interface| is_considered(criterion, interface))
        .find(|interface| match provider.addresses(interface) {
            Ok(records) => qualifies(criterion, &records),
            Err(e) => {
                debug!("Skipping {}: {}", interface, e);
                false
            }
        });

    match credited {
        Some(interface) => {
            debug!("Network is up via {}", interface);
            Report::up(interface)
        }
        None => {
            debug!("No interface qualifies, network is down");
            Report::down()
        }
    }
}

/// Whether `interface` takes part in the classification at all.
pub fn is_considered(criterion: Criterion, interface: &Interface) -> bool {
    match criterion {
        Criterion::Address => !interface.is_loopback(),
        Criterion::LinkLayer => true,
    }
}

/// Whether an address list is enough to call the host connected.
pub fn qualifies(criterion: Criterion, records: &[AddressRecord]) -> bool {
    match criterion {
        Criterion::Address => {
            !records.ipv4_addrs().is_empty() || !records.routable_ipv6_addrs().is_empty()
        }
        Criterion::LinkLayer => !records.link_addrs().is_empty(),
    }
}
