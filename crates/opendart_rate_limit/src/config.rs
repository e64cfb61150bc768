//! Pacing parameters.

use crate::{RateLimitError, RateLimitErrorKind};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Bounds and multipliers for the adaptive delay.
///
/// Deserializes from a `[rate_limit]` TOML table; every field is optional.
///
/// ```toml
/// [rate_limit]
/// min_delay_secs = 0.5
/// max_delay_secs = 16.0
/// backoff_factor = 2.0
/// recovery_factor = 0.9
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Floor, and starting value, of the delay in seconds
    min_delay_secs: f64,
    /// Ceiling of the delay in seconds
    max_delay_secs: f64,
    /// Multiplier applied on throttling (> 1)
    backoff_factor: f64,
    /// Multiplier applied on success (0 < r <= 1)
    recovery_factor: f64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            min_delay_secs: 0.5,
            max_delay_secs: 16.0,
            backoff_factor: 2.0,
            recovery_factor: 0.9,
        }
    }
}

impl RateLimitConfig {
    /// Build a config from explicit values. Call [`validate`](Self::validate)
    /// or go through [`AdaptiveRateLimiter::new`](crate::AdaptiveRateLimiter::new)
    /// before use.
    pub fn new(
        min_delay_secs: f64,
        max_delay_secs: f64,
        backoff_factor: f64,
        recovery_factor: f64,
    ) -> Self {
        Self {
            min_delay_secs,
            max_delay_secs,
            backoff_factor,
            recovery_factor,
        }
    }

    /// Check the invariants the limiter relies on.
    ///
    /// # Examples
    ///
    /// ```
    /// use opendart_rate_limit::RateLimitConfig;
    ///
    /// assert!(RateLimitConfig::default().validate().is_ok());
    /// assert!(RateLimitConfig::new(2.0, 1.0, 2.0, 0.9).validate().is_err());
    /// assert!(RateLimitConfig::new(0.5, 16.0, 1.0, 0.9).validate().is_err());
    /// ```
    #[track_caller]
    pub fn validate(&self) -> Result<(), RateLimitError> {
        for (name, value) in [
            ("min_delay_secs", self.min_delay_secs),
            ("max_delay_secs", self.max_delay_secs),
        ] {
            if Duration::try_from_secs_f64(value).is_err() {
                return Err(RateLimitError::new(RateLimitErrorKind::InvalidDelay(
                    format!("{} must be a non-negative number of seconds, got {}", name, value),
                )));
            }
        }
        if self.min_delay_secs > self.max_delay_secs {
            return Err(RateLimitError::new(RateLimitErrorKind::InvalidDelay(
                format!(
                    "min_delay_secs ({}) exceeds max_delay_secs ({})",
                    self.min_delay_secs, self.max_delay_secs
                ),
            )));
        }
        if !self.backoff_factor.is_finite() || self.backoff_factor <= 1.0 {
            return Err(RateLimitError::new(RateLimitErrorKind::InvalidFactor(
                format!("backoff_factor must be > 1, got {}", self.backoff_factor),
            )));
        }
        if !(self.recovery_factor > 0.0 && self.recovery_factor <= 1.0) {
            return Err(RateLimitError::new(RateLimitErrorKind::InvalidFactor(
                format!("recovery_factor must be in (0, 1], got {}", self.recovery_factor),
            )));
        }
        Ok(())
    }

    /// Lower delay bound. Only meaningful on a validated config.
    pub(crate) fn min_delay(&self) -> Duration {
        Duration::from_secs_f64(self.min_delay_secs)
    }

    /// Upper delay bound. Only meaningful on a validated config.
    pub(crate) fn max_delay(&self) -> Duration {
        Duration::from_secs_f64(self.max_delay_secs)
    }
}
