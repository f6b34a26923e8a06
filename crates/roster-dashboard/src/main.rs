use std::process::ExitCode;

use clap::Parser;
use roster_dashboard::cli::{Cli, run};
use roster_dashboard::client::RosterClient;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_err| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let client = RosterClient::new(&cli.api_base)?;

    tracing::debug!(api_base = %cli.api_base, "Dashboard client ready");

    if let Err(e) = run(&client, cli.command).await {
        eprintln!("Error: {e}");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
