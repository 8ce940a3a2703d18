mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{consulates, contact, inspect, replay};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match &cli.command {
        Commands::Inspect(args) => inspect::run(&cli, args),
        Commands::Replay(args) => replay::run(&cli, args),
        Commands::Contact(args) => contact::run(&cli, args),
        Commands::Consulates => consulates::run(&cli),
    }
}

/// `RUST_LOG` wins when set; otherwise `-v` picks the level.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> { run() }
