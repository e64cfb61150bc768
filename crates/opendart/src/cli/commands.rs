//! CLI argument definitions.

use clap::{Parser, ValueEnum};
use opendart::ReportFormat;
use std::path::PathBuf;

/// OpenDART API endpoint verification
#[derive(Parser, Debug)]
#[command(name = "opendart-verify")]
#[command(about = "Call every OpenDART endpoint and report which ones work", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verify only one category (DS001 .. DS006)
    #[arg(short, long, conflicts_with = "endpoint")]
    pub category: Option<String>,

    /// Verify only one endpoint (e.g. DS001-01)
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// OpenDART API key (default: OPENDART_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Extra configuration file, applied over opendart.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text
    Console,
    /// JSON document
    Json,
    /// Markdown tables
    Markdown,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Console => ReportFormat::Console,
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Markdown => ReportFormat::Markdown,
        }
    }
}
