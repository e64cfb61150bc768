//! The adaptive delay controller.

use crate::{RateLimitConfig, RateLimitError};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, instrument, warn};

/// Paces outbound requests with a single delay that adapts to throttling.
///
/// Call [`wait`](Self::wait) before every request, then report the outcome
/// with [`on_success`](Self::on_success) or
/// [`on_rate_limited`](Self::on_rate_limited). The delay always stays within
/// the configured bounds.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct AdaptiveRateLimiter {
    /// Validated pacing parameters
    config: RateLimitConfig,
    /// Delay enforced between consecutive requests
    current_delay: Duration,
    /// When the last request was released, if ever
    last_request: Option<Instant>,
    /// Throttling events seen since construction or reset
    rate_limit_count: u32,
    /// Requests released since construction or reset
    request_count: u64,
}

impl AdaptiveRateLimiter {
    /// Create a limiter starting at the minimum delay.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`RateLimitConfig::validate`].
    #[track_caller]
    pub fn new(config: RateLimitConfig) -> Result<Self, RateLimitError> {
        config.validate()?;
        Ok(Self {
            current_delay: config.min_delay(),
            config,
            last_request: None,
            rate_limit_count: 0,
            request_count: 0,
        })
    }

    /// Suspend until at least the current delay has passed since the last
    /// request, then mark a new request as released.
    #[instrument(skip(self), fields(delay_ms = self.current_delay.as_millis() as u64))]
    pub async fn wait(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = Instant::now().saturating_duration_since(last);
            if elapsed < self.current_delay {
                let remaining = self.current_delay - elapsed;
                debug!(remaining_ms = remaining.as_millis() as u64, "Pacing request");
                tokio::time::sleep(remaining).await;
            }
        }
        self.last_request = Some(Instant::now());
        self.request_count += 1;
    }

    /// Decay the delay toward the minimum.
    pub fn on_success(&mut self) {
        let min = self.config.min_delay();
        let next = self.current_delay.mul_f64(*self.config.recovery_factor());
        self.current_delay = next.max(min);
        debug!(
            delay_ms = self.current_delay.as_millis() as u64,
            "Request succeeded, delay recovered"
        );
    }

    /// Count a throttling event and grow the delay toward the maximum.
    pub fn on_rate_limited(&mut self) {
        self.rate_limit_count += 1;
        let max = self.config.max_delay();
        let grown = self.current_delay.as_secs_f64() * self.config.backoff_factor();
        self.current_delay = if grown >= *self.config.max_delay_secs() {
            max
        } else {
            Duration::from_secs_f64(grown)
        };
        warn!(
            delay_ms = self.current_delay.as_millis() as u64,
            rate_limit_count = self.rate_limit_count,
            "Rate limited, backing off"
        );
    }

    /// Restore the initial state.
    pub fn reset(&mut self) {
        self.current_delay = self.config.min_delay();
        self.last_request = None;
        self.rate_limit_count = 0;
        self.request_count = 0;
    }
}

impl Default for AdaptiveRateLimiter {
    fn default() -> Self {
        let config = RateLimitConfig::default();
        Self {
            current_delay: config.min_delay(),
            config,
            last_request: None,
            rate_limit_count: 0,
            request_count: 0,
        }
    }
}
