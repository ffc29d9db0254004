use colored::*;

use netprobe_common::config::Config;
use netprobe_common::network::status::Status;
use netprobe_core::probe;
use netprobe_core::snapshot::Snapshot;
use netprobe_core::system::SystemInterfaces;

use crate::terminal::{colors, network_fmt, print};

/// Lists the interface table and the verdict computed from that same table.
pub fn interfaces(cfg: &Config) -> anyhow::Result<()> {
    let snapshot = Snapshot::capture(&SystemInterfaces);

    print::header("network interfaces");
    if snapshot.is_empty() {
        print::print_status("No interfaces reported by the operating system");
    }
    for (idx, (interface, lookup)) in snapshot.entries().enumerate() {
        network_fmt::print_interface(idx, interface, lookup, cfg.criterion);
    }

    let report = probe::probe(&snapshot, cfg.criterion);

    print::header("verdict");
    let status = match report.status {
        Status::Up => report.status.as_str().color(colors::STATUS_UP).bold(),
        Status::Down => report.status.as_str().color(colors::STATUS_DOWN).bold(),
    };
    print::aligned_line("Checked", snapshot.len().to_string());
    print::aligned_line("Status", status);
    if let Some(interface) = report.interface {
        print::aligned_line("Via", interface.name);
    }
    print::end_of_program();

    Ok(())
}
