use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use error_report_client::cli::Cli;
use error_report_client::client::{self, SubmissionClient};
use error_report_client::config::ClientConfig;
use error_report_client::{payload, report};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<bool> {
    if cli.create_sample {
        let path = payload::write_sample_payload(Path::new("."))
            .context("failed to create sample payload")?;
        println!("✅ Created {}", path.display());
        return Ok(true);
    }

    let payload = match &cli.payload_file {
        Some(path) => payload::load_payload(path)?,
        None => {
            println!("No payload file provided, using sample payload...");
            payload::create_sample_payload()
        }
    };

    client::validate_endpoint(&cli.server_url)?;

    let config = ClientConfig::from_env();
    debug!(timeout_secs = config.timeout_secs, "client configuration loaded");
    let client = SubmissionClient::new(&config)?;

    report::announce(&cli.server_url, &payload);
    let outcome = client.submit(&cli.server_url, &payload).await;

    Ok(report::render(&outcome))
}
