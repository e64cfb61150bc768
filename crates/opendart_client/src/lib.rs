//! Async client for the OpenDART disclosure API.
//!
//! One method per remote endpoint, grouped by service the same way the
//! upstream documentation groups them:
//!
//! ```no_run
//! use opendart_client::{OpenDartClient, ReportQuery};
//!
//! # async fn run() -> opendart_error::OpendartResult<()> {
//! let client = OpenDartClient::new("YOUR_API_KEY")?;
//! let company = client.disclosure().get_company("00126380").await?;
//! let dividends = client
//!     .report()
//!     .get_dividends(&ReportQuery::new("00126380", "2023", "11011"))
//!     .await?;
//! println!("{}: {} dividend rows", company.corp_name, dividends.len());
//! # Ok(())
//! # }
//! ```
//!
//! [`OpenDartClient`] also implements [`DartApi`](opendart_interface::DartApi),
//! which is how the verification harness drives it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod client;
mod query;
mod services;

pub use client::{DEFAULT_TIMEOUT, OpenDartClient, OpenDartClientBuilder};
pub use query::{
    DisclosureSearch, DisclosureSearchBuilder, FinancialQuery, PeriodQuery, ReportQuery,
};
pub use services::{
    DisclosureService, FinancialService, MajorEventService, RegistrationService, ReportService,
    ShareholderService,
};
