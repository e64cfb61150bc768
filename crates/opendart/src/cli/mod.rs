//! Command-line interface module.
//!
//! This module provides the argument structure and the verification command
//! for the opendart-verify binary.

mod commands;
mod run;

pub use commands::Cli;
pub use run::run_verification;
