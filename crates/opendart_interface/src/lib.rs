//! Invocation interface for the OpenDART API.
//!
//! The verification harness never calls client methods by name. It names an
//! [`Operation`], supplies typed [`Params`], and receives a [`Payload`] through
//! the [`DartApi`] trait. The HTTP client implements the trait; tests supply
//! scripted doubles.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod operation;
mod params;
mod payload;
mod traits;

pub use operation::{Operation, ResponseShape};
pub use params::{Param, Params};
pub use payload::Payload;
pub use traits::DartApi;
