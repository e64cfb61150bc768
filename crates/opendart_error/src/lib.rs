//! Error types for the OpenDART crates.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use opendart_error::{DartError, DartErrorKind, OpendartResult};
//!
//! fn fetch_company() -> OpendartResult<String> {
//!     Err(DartError::new(DartErrorKind::from_status("013", None)))?
//! }
//!
//! let err = fetch_company().unwrap_err();
//! assert!(err.is_rate_limited());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod dart;
mod error;
mod http;
mod json;
mod param;

pub use config::ConfigError;
pub use dart::{DartError, DartErrorKind, StatusClass, StatusCode};
pub use error::{OpendartError, OpendartErrorKind, OpendartResult};
pub use http::HttpError;
pub use json::JsonError;
pub use param::ParamError;
