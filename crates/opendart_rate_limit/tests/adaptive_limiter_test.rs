//! Tests for the adaptive rate limiter.

use opendart_rate_limit::{AdaptiveRateLimiter, RateLimitConfig, RateLimitErrorKind};
use std::time::Duration;
use tokio::time::Instant;

fn limiter() -> AdaptiveRateLimiter {
    AdaptiveRateLimiter::new(RateLimitConfig::default()).unwrap()
}

#[test]
fn test_starts_at_minimum_delay() {
    let limiter = limiter();
    assert_eq!(*limiter.current_delay(), Duration::from_millis(500));
    assert_eq!(*limiter.rate_limit_count(), 0);
    assert!(limiter.last_request().is_none());
}

#[test]
fn test_backoff_doubles_until_ceiling() {
    let mut limiter = limiter();
    let expected = [1.0, 2.0, 4.0, 8.0, 16.0, 16.0, 16.0];

    for secs in expected {
        limiter.on_rate_limited();
        assert_eq!(*limiter.current_delay(), Duration::from_secs_f64(secs));
    }
    assert_eq!(*limiter.rate_limit_count(), 7);
}

#[test]
fn test_recovery_never_drops_below_floor() {
    let mut limiter = limiter();
    limiter.on_rate_limited();
    limiter.on_rate_limited();

    let mut previous = *limiter.current_delay();
    for _ in 0..100 {
        limiter.on_success();
        let current = *limiter.current_delay();
        assert!(current <= previous);
        assert!(current >= Duration::from_millis(500));
        previous = current;
    }
    assert_eq!(previous, Duration::from_millis(500));
}

#[test]
fn test_delay_stays_in_bounds_under_mixed_feedback() {
    let mut limiter = limiter();
    let pattern = [true, true, false, true, false, false, true, true, true, true, true, false];

    for throttled in pattern.iter().cycle().take(200) {
        let before = *limiter.current_delay();
        if *throttled {
            limiter.on_rate_limited();
            assert!(*limiter.current_delay() >= before);
        } else {
            limiter.on_success();
            assert!(*limiter.current_delay() <= before);
        }
        assert!(*limiter.current_delay() >= Duration::from_millis(500));
        assert!(*limiter.current_delay() <= Duration::from_secs(16));
    }
}

#[tokio::test(start_paused = true)]
async fn test_first_wait_does_not_sleep() {
    let mut limiter = limiter();
    let start = Instant::now();
    limiter.wait().await;
    assert_eq!(start.elapsed(), Duration::ZERO);
    assert_eq!(*limiter.request_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_consecutive_waits_are_spaced_by_current_delay() {
    let mut limiter = limiter();
    limiter.wait().await;
    let first = limiter.last_request().unwrap();

    limiter.wait().await;
    let second = limiter.last_request().unwrap();
    assert!(second - first >= Duration::from_millis(500));

    limiter.on_rate_limited();
    limiter.wait().await;
    let third = limiter.last_request().unwrap();
    assert!(third - second >= Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn test_wait_only_sleeps_for_the_remainder() {
    let mut limiter = limiter();
    limiter.wait().await;

    tokio::time::advance(Duration::from_millis(300)).await;
    let start = Instant::now();
    limiter.wait().await;
    let slept = start.elapsed();
    assert!(slept >= Duration::from_millis(200));
    assert!(slept <= Duration::from_millis(201));

    tokio::time::advance(Duration::from_secs(2)).await;
    let start = Instant::now();
    limiter.wait().await;
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_reset_restores_initial_state() {
    let mut limiter = limiter();
    limiter.wait().await;
    limiter.on_rate_limited();
    limiter.on_rate_limited();

    limiter.reset();
    assert_eq!(*limiter.current_delay(), Duration::from_millis(500));
    assert_eq!(*limiter.rate_limit_count(), 0);
    assert_eq!(*limiter.request_count(), 0);
    assert!(limiter.last_request().is_none());
}

#[test]
fn test_invalid_configs_are_rejected() {
    let cases = [
        RateLimitConfig::new(-1.0, 16.0, 2.0, 0.9),
        RateLimitConfig::new(0.5, f64::INFINITY, 2.0, 0.9),
        RateLimitConfig::new(20.0, 16.0, 2.0, 0.9),
        RateLimitConfig::new(0.5, 16.0, 0.5, 0.9),
        RateLimitConfig::new(0.5, 16.0, 2.0, 0.0),
        RateLimitConfig::new(0.5, 16.0, 2.0, 1.5),
    ];

    for config in cases {
        assert!(AdaptiveRateLimiter::new(config).is_err(), "{config:?}");
    }

    let err = RateLimitConfig::new(0.5, 16.0, 1.0, 0.9).validate().unwrap_err();
    assert!(matches!(err.kind(), RateLimitErrorKind::InvalidFactor(_)));
}

#[test]
fn test_partial_config_fills_defaults() {
    let config: RateLimitConfig = serde_json::from_str(r#"{"max_delay_secs": 4.0}"#).unwrap();
    assert_eq!(*config.min_delay_secs(), 0.5);
    assert_eq!(*config.max_delay_secs(), 4.0);
    assert_eq!(*config.backoff_factor(), 2.0);
}
