//! Adaptive request pacing.
//!
//! OpenDART does not publish its rate limit. Instead of a fixed quota this
//! crate keeps a single inter-request delay that doubles (by default) every
//! time the service reports throttling and decays slowly on success.
//!
//! ```
//! use opendart_rate_limit::{AdaptiveRateLimiter, RateLimitConfig};
//! use std::time::Duration;
//!
//! let mut limiter = AdaptiveRateLimiter::new(RateLimitConfig::default()).unwrap();
//! limiter.on_rate_limited();
//! assert_eq!(*limiter.current_delay(), Duration::from_secs(1));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod limiter;

pub use config::RateLimitConfig;
pub use error::{RateLimitError, RateLimitErrorKind};
pub use limiter::AdaptiveRateLimiter;
