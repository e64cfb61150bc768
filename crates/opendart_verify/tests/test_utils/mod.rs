//! Test utilities for verification tests.
//!
//! This module provides a mock backend and small registry helpers.

use opendart_interface::{Operation, Param};
use opendart_rate_limit::{AdaptiveRateLimiter, RateLimitConfig};
use opendart_verify::{EndpointSpec, Registry};

pub mod mock_api;

#[allow(unused_imports)]
pub use mock_api::{MockApi, MockBehavior, MockResponse};

/// Limiter with a short fixed floor so paused-clock tests stay readable.
#[allow(dead_code)]
pub fn fast_limiter() -> AdaptiveRateLimiter {
    AdaptiveRateLimiter::new(RateLimitConfig::new(0.1, 1.6, 2.0, 0.5))
        .expect("valid limiter config")
}

/// Four-endpoint registry: search first, receipt-dependent download last.
#[allow(dead_code)]
pub fn discovery_registry() -> Registry {
    Registry::new(vec![
        EndpointSpec::new("T-01", Operation::DisclosureSearch, "공시검색").test_data(&[
            Param::CorpCode,
            Param::BgnDe,
            Param::EndDe,
        ]),
        EndpointSpec::new("T-02", Operation::DisclosureGetCompany, "기업개황 조회")
            .test_data(&[Param::CorpCode]),
        EndpointSpec::new("T-03", Operation::ShareholderGetMajorStock, "대량보유 상황보고 조회")
            .test_data(&[Param::CorpCode]),
        EndpointSpec::new("T-04", Operation::DisclosureDownloadDocument, "공시서류 원본 다운로드")
            .receipt_no(Param::RceptNo),
    ])
}
