//! Live verification of every OpenDART endpoint.
//!
//! The [`Registry`] lists one [`EndpointSpec`] per remote operation. An
//! [`EndpointVerifier`] walks the registry in order, calls each operation
//! through the [`DartApi`](opendart_interface::DartApi) seam with adaptive
//! pacing, and classifies the result into a [`VerificationOutcome`]. The
//! reporter turns a run's outcomes into console, JSON or Markdown text.
//!
//! ```no_run
//! use opendart_verify::{EndpointVerifier, ReportFormat, VerifierConfig, generate_report};
//! use std::time::Instant;
//!
//! # async fn run() -> opendart_error::OpendartResult<()> {
//! let config = VerifierConfig::load()?;
//! let mut verifier = EndpointVerifier::from_config(&config)?;
//!
//! let started = Instant::now();
//! let outcomes = verifier.verify_category("DS001").await;
//! println!("{}", generate_report(&outcomes, started.elapsed(), ReportFormat::Console));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod outcome;
mod registry;
mod reporter;
mod verifier;

pub use config::{TestData, VerifierConfig};
pub use outcome::{PayloadSummary, VerificationOutcome, VerificationStatus};
pub use registry::{EndpointSpec, ParamSource, Registry, RuntimeVariable};
pub use reporter::{ReportFormat, VerificationReport, generate_report};
pub use verifier::{DEFAULT_MAX_RETRIES, EndpointVerifier};
