//! Verifier configuration.
//!
//! Sources are layered, later ones winning:
//! - Bundled defaults (include_str! from opendart.toml)
//! - `~/.config/opendart/opendart.toml`
//! - `./opendart.toml`
//! - An explicit file, when given
//! - `OPENDART_*` environment variables (`OPENDART_API_KEY`,
//!   `OPENDART_RATE_LIMIT__MIN_DELAY_SECS`, ...)

use crate::DEFAULT_MAX_RETRIES;
use config::{Config, Environment, File, FileFormat};
use opendart_error::{ConfigError, OpendartError, OpendartResult};
use opendart_interface::Param;
use opendart_rate_limit::RateLimitConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../opendart.toml");

/// Argument values used when calling endpoints.
///
/// Defaults target Samsung Electronics' 2023 annual report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestData {
    /// Corporation code
    pub corp_code: String,
    /// Business year
    pub bsns_year: String,
    /// Report code (11011 = annual)
    pub reprt_code: String,
    /// Search range start
    pub bgn_de: String,
    /// Search range end
    pub end_de: String,
    /// CFS (consolidated) or OFS (separate)
    pub fs_div: String,
    /// Statement division for taxonomy lookups
    pub sj_div: String,
}

impl Default for TestData {
    fn default() -> Self {
        Self {
            corp_code: "00126380".to_string(),
            bsns_year: "2023".to_string(),
            reprt_code: "11011".to_string(),
            bgn_de: "20230101".to_string(),
            end_de: "20231231".to_string(),
            fs_div: "CFS".to_string(),
            sj_div: "BS".to_string(),
        }
    }
}

impl TestData {
    /// Value for `param`, if test data covers it.
    ///
    /// # Examples
    ///
    /// ```
    /// use opendart_interface::Param;
    /// use opendart_verify::TestData;
    ///
    /// let data = TestData::default();
    /// assert_eq!(data.get(Param::CorpCode), Some("00126380"));
    /// assert_eq!(data.get(Param::RceptNo), None);
    /// ```
    pub fn get(&self, param: Param) -> Option<&str> {
        let value = match param {
            Param::CorpCode => &self.corp_code,
            Param::BsnsYear => &self.bsns_year,
            Param::ReprtCode => &self.reprt_code,
            Param::BgnDe => &self.bgn_de,
            Param::EndDe => &self.end_de,
            Param::FsDiv => &self.fs_div,
            Param::SjDiv => &self.sj_div,
            _ => return None,
        };
        Some(value.as_str())
    }
}

/// Everything needed to build an [`EndpointVerifier`](crate::EndpointVerifier).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct VerifierConfig {
    /// OpenDART API key
    api_key: Option<String>,
    /// Service root override
    base_url: Option<String>,
    /// Per-call timeout in seconds
    timeout_secs: u64,
    /// Retries allowed after a throttled call
    max_retries: u32,
    /// Pacing parameters
    rate_limit: RateLimitConfig,
    /// Argument values
    test_data: TestData,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout_secs: 30,
            max_retries: DEFAULT_MAX_RETRIES,
            rate_limit: RateLimitConfig::default(),
            test_data: TestData::default(),
        }
    }
}

impl VerifierConfig {
    /// Load from the default layers.
    pub fn load() -> OpendartResult<Self> {
        Self::load_with(None)
    }

    /// Load from the default layers plus an explicit file.
    ///
    /// # Errors
    ///
    /// Fails if the explicit file is missing, any layer is malformed, or the
    /// merged result does not pass [`validate`](Self::validate).
    #[instrument]
    pub fn load_with(explicit: Option<&Path>) -> OpendartResult<Self> {
        debug!("Loading configuration with precedence: env > explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/opendart/opendart.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("opendart").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("OPENDART")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder
            .build()
            .map_err(|e| {
                OpendartError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                OpendartError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load a single file on top of built-in defaults, ignoring other layers.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> OpendartResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                OpendartError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                OpendartError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values the verifier cannot run with.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rate_limit
            .validate()
            .map_err(|e| ConfigError::for_setting("rate_limit", e.to_string()))?;
        if self.timeout_secs == 0 {
            return Err(ConfigError::for_setting("timeout_secs", "must be at least 1"));
        }
        Ok(())
    }

    /// Replace the API key, typically from a command-line flag.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Replace the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Per-call timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
