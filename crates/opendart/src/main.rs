//! OpenDART endpoint verification binary.
//!
//! Calls every registered OpenDART endpoint (or one category, or one
//! endpoint) and prints a console, JSON or Markdown report. Exits non-zero
//! when any endpoint failed.

use clap::Parser;
use opendart::VerificationStatus;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    use cli::{Cli, run_verification};

    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the report
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run_verification(&cli).await {
        Ok(outcomes) => {
            if outcomes
                .iter()
                .any(|o| *o.status() == VerificationStatus::Failed)
            {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Verification could not run");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
