use netprobe_common::config::Config;
use netprobe_core::probe;
use netprobe_core::system::SystemInterfaces;

use crate::terminal::print;

pub fn status(cfg: &Config) -> anyhow::Result<()> {
    let status = probe::check_network_status_with(&SystemInterfaces, cfg.criterion);
    print::status(status)
}
