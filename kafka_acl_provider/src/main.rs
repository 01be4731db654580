#![warn(unused_imports)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::style)]

use anyhow::Context;
use clap::Parser;
use kafka_acl_provider::error::Diagnostic;
use kafka_acl_provider::startup::{run_command, ProviderCommand};
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Debug, Parser)]
#[command(name = "kafka_acl_provider", about = "Manages Kafka ACLs of Instaclustr clusters")]
struct Cli {
    #[command(subcommand)]
    command: ProviderCommand,
}

#[tokio::main]
async fn main() -> Result<ExitCode, anyhow::Error> {
    let cli = Cli::parse();

    let log_level = std::env::var("RUST_LOG").unwrap_or("info".to_owned());

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(log_level);

    // stdout carries the resulting state, logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();

    let (output, exit_code) = match run_command(cli.command).await {
        Ok(state) => (state, ExitCode::SUCCESS),
        Err(e) => {
            let diagnostic = Diagnostic::from(e);
            let output = serde_json::to_value(diagnostic).context("While serializing diagnostic")?;
            (output, ExitCode::FAILURE)
        }
    };

    let printed = serde_json::to_string_pretty(&output).context("While serializing output")?;
    println!("{printed}");

    Ok(exit_code)
}
