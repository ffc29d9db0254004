mod commands;
mod terminal;

use std::time::Duration;

use commands::{CommandLine, Commands, interfaces, status, watch};
use netprobe_common::config::Config;
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose);

    let cfg = Config {
        criterion: commands.criterion.into(),
    };

    match commands.command.unwrap_or(Commands::Status) {
        Commands::Status => status::status(&cfg),
        Commands::Watch { interval } => watch::watch(Duration::from_secs(interval), &cfg).await,
        Commands::Interfaces => interfaces::interfaces(&cfg),
    }
}
