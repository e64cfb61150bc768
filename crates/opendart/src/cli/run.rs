//! The verification command.

use super::Cli;
use opendart::{
    EndpointVerifier, ReportFormat, VerificationOutcome, VerificationStatus, VerifierConfig,
    generate_report,
};
use std::time::Instant;
use tracing::info;

/// Load configuration, run the selected endpoints and emit the report.
///
/// Returns the outcomes so the caller can pick an exit code.
pub async fn run_verification(
    cli: &Cli,
) -> Result<Vec<VerificationOutcome>, Box<dyn std::error::Error>> {
    let mut config = VerifierConfig::load_with(cli.config.as_deref())?;
    if let Some(api_key) = &cli.api_key {
        config = config.with_api_key(api_key.clone());
    }

    let mut verifier = EndpointVerifier::from_config(&config)?;

    let started = Instant::now();
    let outcomes = if let Some(endpoint) = &cli.endpoint {
        info!(%endpoint, "Verifying endpoint");
        vec![verifier.verify_endpoint(endpoint).await]
    } else if let Some(category) = &cli.category {
        info!(%category, "Verifying category");
        verifier.verify_category(category).await
    } else {
        info!("Verifying all endpoints");
        verifier.verify_all(None).await
    };
    let duration = started.elapsed();

    let format = ReportFormat::from(cli.format);
    let report = generate_report(&outcomes, duration, format);

    match &cli.output {
        Some(path) => {
            tokio::fs::write(path, &report).await?;
            println!("Report saved to: {}", path.display());
            if format != ReportFormat::Console {
                println!("{}", summary_line(&outcomes));
            }
        }
        None => println!("{}", report),
    }

    Ok(outcomes)
}

/// One-line status tally.
pub fn summary_line(outcomes: &[VerificationOutcome]) -> String {
    let count = |status: VerificationStatus| {
        outcomes.iter().filter(|o| *o.status() == status).count()
    };
    format!(
        "Summary: {} success, {} no data, {} failed, {} skipped",
        count(VerificationStatus::Success),
        count(VerificationStatus::NoData),
        count(VerificationStatus::Failed),
        count(VerificationStatus::Skipped)
    )
}
