mod cli;
mod commands;
mod error;
mod metadata;
mod output;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::error::CliError;

const DEFAULT_LOG_FILTER: &str = "shoplens=info,shoplens_core=info";

#[tokio::main]
async fn main() -> ExitCode {
    // Before the subscriber and clap, so `.env` can set RUST_LOG and SHOPLENS_API_URL.
    let dotenv = dotenvy::dotenv();

    // Logs go to stderr so stdout stays a clean JSON document.
    tracing_subscriber::registry()
        .with(log_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(error) = dotenv {
        if !error.not_found() {
            tracing::warn!("ignoring unreadable .env file: {error}");
        }
    }

    match run().await {
        Ok(code) => code,
        Err(error) => {
            tracing::error!("{error}");
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

/// `RUST_LOG` as seen after `.env` loading, else info for our crates.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into())
}

async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();

    let envelope = commands::run(&cli).await?;
    output::render(&envelope, cli.format, cli.pretty)?;

    Ok(ExitCode::from(commands::exit_code(&envelope)))
}
