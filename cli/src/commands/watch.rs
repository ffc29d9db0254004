use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};
use tracing::info;

use netprobe_common::config::Config;
use netprobe_core::probe;
use netprobe_core::system::SystemInterfaces;

use crate::terminal::print;

/// Prints a fresh verdict every `period` until Ctrl-C.
///
/// Each tick is an independent probe; nothing is carried between ticks.
pub async fn watch(period: Duration, cfg: &Config) -> anyhow::Result<()> {
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!("Probing every {}s, press Ctrl-C to stop", period.as_secs());

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let status = probe::check_network_status_with(&SystemInterfaces, cfg.criterion);
                print::status(status)?;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, stopping");
                return Ok(());
            }
        }
    }
}
