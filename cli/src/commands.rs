pub mod interfaces;
pub mod status;
pub mod watch;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use netprobe_common::config::Criterion;

/// Seconds between probes in watch mode, matching common status-bar refresh rates.
const DEFAULT_INTERVAL_SECS: u64 = 5;

#[derive(Parser)]
#[command(name = "netprobe")]
#[command(about = "Reports whether this host has network connectivity.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Rule deciding whether an interface counts as connected
    #[arg(long, value_enum, global = true, default_value_t = CriterionArg::Address)]
    pub criterion: CriterionArg,

    /// Log diagnostics to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Clone, Copy)]
pub enum Commands {
    /// Print "Up" or "Down" once (default)
    #[command(alias = "s")]
    Status,
    /// Print the status repeatedly until interrupted
    #[command(alias = "w")]
    Watch {
        /// Seconds between probes
        #[arg(short, long, default_value_t = DEFAULT_INTERVAL_SECS,
              value_parser = clap::value_parser!(u64).range(1..))]
        interval: u64,
    },
    /// List interfaces with their addresses and the resulting verdict
    #[command(alias = "i")]
    Interfaces,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CriterionArg {
    /// IPv4, or IPv6 outside fe80:, on a non-loopback interface
    Address,
    /// Any hardware address on any interface
    LinkLayer,
}

impl From<CriterionArg> for Criterion {
    fn from(arg: CriterionArg) -> Self {
        match arg {
            CriterionArg::Address => Criterion::Address,
            CriterionArg::LinkLayer => Criterion::LinkLayer,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
