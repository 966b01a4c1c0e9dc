use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod output;

use self::cli::{Cli, Command};
use self::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load();

    match cli.command {
        Command::Build(args) => commands::build::run(args, &config).await,
        Command::Evaluate(args) => commands::evaluate::run(args, &config).await,
        Command::Prepare(args) => commands::prepare::run(args),
    }
}

/// Logging is off unless `-v` is given or `RUST_LOG` overrides it, as the
/// original tool kept its log level at OFF outside verbose mode.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "trace" } else { "off" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
