//! OpenDART - client and endpoint verification for Korea's electronic
//! disclosure system.
//!
//! # Features
//!
//! - **Typed Client**: One async method per OpenDART endpoint, grouped by service
//! - **Status Classification**: Upstream status codes mapped to typed errors
//! - **Adaptive Pacing**: A single request delay that backs off on throttling
//! - **Verification Harness**: Live check of all 30 endpoints with console,
//!   JSON and Markdown reports
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use opendart::{OpenDartClient, ReportQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenDartClient::from_env()?;
//!
//!     let query = ReportQuery::new("00126380", "2023", "11011");
//!     let dividends = client.report().get_dividends(&query).await?;
//!     println!("{} dividend rows", dividends.len());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `opendart_error` - Error types and upstream status classification
//! - `opendart_core` - Constants and response records
//! - `opendart_interface` - `DartApi` trait, operations and parameters
//! - `opendart_rate_limit` - Adaptive rate limiter
//! - `opendart_client` - reqwest-based HTTP client
//! - `opendart_verify` - Endpoint registry, verifier and reporter
//!
//! This crate re-exports everything for convenience and ships the
//! `opendart-verify` binary.

pub use opendart_client::*;
pub use opendart_core::*;
pub use opendart_error::*;
pub use opendart_interface::*;
pub use opendart_rate_limit::*;
pub use opendart_verify::*;
