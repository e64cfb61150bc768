//! Tests for the verification loop: retries, skips, discovery and
//! classification.

mod test_utils;

use opendart_interface::{Operation, Param};
use opendart_rate_limit::AdaptiveRateLimiter;
use opendart_verify::{
    EndpointVerifier, PayloadSummary, Registry, TestData, VerificationStatus,
};
use std::sync::Arc;
use std::time::Duration;
use test_utils::{MockApi, MockBehavior, MockResponse, discovery_registry, fast_limiter};

fn single(id: &str) -> Registry {
    let spec = Registry::opendart()
        .get(id)
        .cloned()
        .expect("registered endpoint");
    Registry::new(vec![spec])
}

/// Limiter whose delay has already been raised once (0.5s -> 1s).
fn raised_limiter() -> AdaptiveRateLimiter {
    let mut limiter = AdaptiveRateLimiter::default();
    limiter.on_rate_limited();
    limiter
}

#[tokio::test(start_paused = true)]
async fn test_persistent_throttling_stops_after_max_retries() -> anyhow::Result<()> {
    let api = Arc::new(
        MockApi::new().always(Operation::ReportGetDividends, MockResponse::Status("013")),
    );
    let mut verifier = EndpointVerifier::new(api.clone()).with_registry(single("DS002-02"));

    let outcome = verifier.verify_endpoint("DS002-02").await;

    assert_eq!(*outcome.status(), VerificationStatus::Failed);
    assert_eq!(api.call_count(), 4);
    let message = outcome.error_message().clone().unwrap_or_default();
    assert!(message.starts_with("Rate limit:"), "got {message}");
    assert!(message.contains("after 3 retries"), "got {message}");
    assert_eq!(*verifier.rate_limiter().rate_limit_count(), 4);
    assert_eq!(*verifier.rate_limiter().current_delay(), Duration::from_secs(8));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_zero_retries_makes_one_call() {
    let api = Arc::new(
        MockApi::new().always(Operation::ReportGetDividends, MockResponse::Status("015")),
    );
    let mut verifier = EndpointVerifier::new(api.clone())
        .with_registry(single("DS002-02"))
        .with_max_retries(0);

    let outcome = verifier.verify_endpoint("DS002-02").await;

    assert_eq!(api.call_count(), 1);
    assert_eq!(*outcome.status(), VerificationStatus::Failed);
    assert!(
        outcome
            .error_message()
            .as_deref()
            .is_some_and(|m| m.contains("after 0 retries"))
    );
}

#[tokio::test(start_paused = true)]
async fn test_throttled_call_recovers_on_retry() {
    let api = Arc::new(MockApi::new().on(
        Operation::ReportGetDividends,
        MockBehavior::Sequence(vec![MockResponse::Status("013"), MockResponse::Records(2)]),
    ));
    let mut verifier = EndpointVerifier::new(api.clone()).with_registry(single("DS002-02"));

    let outcome = verifier.verify_endpoint("DS002-02").await;

    assert_eq!(*outcome.status(), VerificationStatus::Success);
    assert_eq!(*outcome.response_data(), Some(PayloadSummary::List { count: 2 }));
    assert_eq!(api.call_count(), 2);
    assert_eq!(*verifier.rate_limiter().rate_limit_count(), 1);
    // 0.5s doubled on throttle, then decayed by 0.9 on success
    assert_eq!(
        *verifier.rate_limiter().current_delay(),
        Duration::from_millis(900)
    );
}

#[tokio::test(start_paused = true)]
async fn test_receipt_dependent_endpoint_skips_without_calls() {
    let api = Arc::new(MockApi::new());
    let mut verifier = EndpointVerifier::new(api.clone()).with_registry(single("DS001-03"));

    let outcome = verifier.verify_endpoint("DS001-03").await;

    assert_eq!(*outcome.status(), VerificationStatus::Skipped);
    assert_eq!(
        outcome.error_message().as_deref(),
        Some("Requires rcept_no from disclosure.search")
    );
    assert!(outcome.response_time().is_zero());
    assert_eq!(api.call_count(), 0);
    assert_eq!(*verifier.rate_limiter().request_count(), 0);
    assert!(verifier.rate_limiter().last_request().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_discovered_receipt_feeds_later_download() -> anyhow::Result<()> {
    let api = Arc::new(MockApi::new().always(
        Operation::DisclosureSearch,
        MockResponse::Disclosures(vec!["20240312000736", "20240101000001"]),
    ));
    let mut verifier = EndpointVerifier::new(api.clone()).with_registry(discovery_registry());

    let outcomes = verifier.verify_all(None).await;

    let ids: Vec<&str> = outcomes.iter().map(|o| o.endpoint_id().as_str()).collect();
    assert_eq!(ids, ["T-01", "T-02", "T-03", "T-04"]);
    assert!(
        outcomes
            .iter()
            .all(|o| *o.status() == VerificationStatus::Success)
    );
    assert_eq!(verifier.rcept_no(), Some("20240312000736"));

    let params = api
        .last_params(Operation::DisclosureDownloadDocument)
        .ok_or_else(|| anyhow::anyhow!("download was never called"))?;
    assert_eq!(params.get(Param::RceptNo), Some("20240312000736"));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_first_discovered_receipt_wins() {
    let api = Arc::new(MockApi::new().on(
        Operation::DisclosureSearch,
        MockBehavior::Sequence(vec![
            MockResponse::Disclosures(vec!["20230001"]),
            MockResponse::Disclosures(vec!["20230002"]),
        ]),
    ));
    let mut verifier = EndpointVerifier::new(api.clone()).with_registry(discovery_registry());

    verifier.verify_all(None).await;
    verifier.verify_all(None).await;

    assert_eq!(api.calls_to(Operation::DisclosureSearch), 2);
    assert_eq!(verifier.rcept_no(), Some("20230001"));
    assert_eq!(
        api.last_params(Operation::DisclosureDownloadDocument)
            .and_then(|p| p.get(Param::RceptNo).map(str::to_string)),
        Some("20230001".to_string())
    );
}

#[tokio::test(start_paused = true)]
async fn test_empty_search_leaves_download_skipped() {
    let api = Arc::new(
        MockApi::new().always(Operation::DisclosureSearch, MockResponse::Disclosures(vec![])),
    );
    let mut verifier = EndpointVerifier::new(api.clone()).with_registry(discovery_registry());

    let outcomes = verifier.verify_all(None).await;

    assert_eq!(*outcomes[0].status(), VerificationStatus::NoData);
    assert_eq!(*outcomes[3].status(), VerificationStatus::Skipped);
    assert_eq!(verifier.rcept_no(), None);
    assert_eq!(api.calls_to(Operation::DisclosureDownloadDocument), 0);
}

#[tokio::test(start_paused = true)]
async fn test_result_shapes_classify() {
    let cases = [
        (MockResponse::Empty, VerificationStatus::NoData, PayloadSummary::Null),
        (
            MockResponse::Records(0),
            VerificationStatus::NoData,
            PayloadSummary::List { count: 0 },
        ),
        (
            MockResponse::Records(3),
            VerificationStatus::Success,
            PayloadSummary::List { count: 3 },
        ),
        (
            MockResponse::Bytes(0),
            VerificationStatus::NoData,
            PayloadSummary::Bytes { size: 0 },
        ),
        (
            MockResponse::Bytes(10),
            VerificationStatus::Success,
            PayloadSummary::Bytes { size: 10 },
        ),
        (
            MockResponse::Company,
            VerificationStatus::Success,
            PayloadSummary::Record {
                type_name: "Company",
            },
        ),
    ];

    for (response, status, summary) in cases {
        let api = Arc::new(MockApi::new().always(Operation::DisclosureGetCompany, response));
        let mut verifier = EndpointVerifier::new(api).with_registry(single("DS001-02"));

        let outcome = verifier.verify_endpoint("DS001-02").await;

        assert_eq!(*outcome.status(), status);
        assert_eq!(*outcome.response_data(), Some(summary));
        assert!(outcome.error_message().is_none());
    }
}

#[tokio::test(start_paused = true)]
async fn test_hard_failures_give_no_limiter_feedback() {
    let cases = [
        (MockResponse::Status("020"), "Validation error: 잘못된 파라미터"),
        (MockResponse::Status("021"), "Validation error: 필수 파라미터 누락"),
        (MockResponse::Status("010"), "API error (010): 등록되지 않은 키"),
        (MockResponse::Status("800"), "API error (800): 시스템 오류"),
        (MockResponse::Status("999"), "API error (999): 알 수 없는 오류"),
        (MockResponse::Transport("connection reset"), "connection reset"),
    ];

    for (response, expected) in cases {
        let api = Arc::new(MockApi::new().always(Operation::ReportGetExecutives, response));
        let mut verifier = EndpointVerifier::new(api.clone())
            .with_registry(single("DS002-05"))
            .with_rate_limiter(raised_limiter());

        let outcome = verifier.verify_endpoint("DS002-05").await;

        assert_eq!(*outcome.status(), VerificationStatus::Failed);
        assert_eq!(outcome.error_message().as_deref(), Some(expected));
        assert_eq!(api.call_count(), 1);
        assert_eq!(*verifier.rate_limiter().current_delay(), Duration::from_secs(1));
        assert_eq!(*verifier.rate_limiter().rate_limit_count(), 1);
    }
}

#[tokio::test(start_paused = true)]
async fn test_not_found_is_no_data_with_success_feedback() {
    let api = Arc::new(
        MockApi::new().always(Operation::ShareholderGetMajorStock, MockResponse::Status("100")),
    );
    let mut verifier = EndpointVerifier::new(api.clone())
        .with_registry(single("DS004-01"))
        .with_rate_limiter(raised_limiter());

    let outcome = verifier.verify_endpoint("DS004-01").await;

    assert_eq!(*outcome.status(), VerificationStatus::NoData);
    assert_eq!(outcome.error_message().as_deref(), Some("조회된 데이터 없음"));
    assert_eq!(api.call_count(), 1);
    assert_eq!(
        *verifier.rate_limiter().current_delay(),
        Duration::from_millis(900)
    );
}

#[tokio::test(start_paused = true)]
async fn test_unknown_endpoint_fails_without_interaction() {
    let api = Arc::new(MockApi::new());
    let mut verifier = EndpointVerifier::new(api.clone());

    let outcome = verifier.verify_endpoint("ZZZ-99").await;

    assert_eq!(*outcome.status(), VerificationStatus::Failed);
    assert_eq!(outcome.endpoint_id(), "ZZZ-99");
    assert_eq!(outcome.endpoint_name(), "unknown");
    assert_eq!(outcome.category(), "unknown");
    assert!(
        outcome
            .error_message()
            .as_deref()
            .is_some_and(|m| m.contains("ZZZ-99"))
    );
    assert_eq!(api.call_count(), 0);
    assert_eq!(*verifier.rate_limiter().request_count(), 0);
    assert_eq!(*verifier.rate_limiter().rate_limit_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_unmatched_category_runs_nothing() {
    let api = Arc::new(MockApi::new());
    let mut verifier = EndpointVerifier::new(api.clone());

    let outcomes = verifier.verify_all(Some("DS999")).await;

    assert!(outcomes.is_empty());
    assert_eq!(api.call_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_category_run_keeps_registry_order() {
    let api = Arc::new(MockApi::new());
    let mut verifier = EndpointVerifier::new(api.clone());

    let outcomes = verifier.verify_category("DS004").await;

    let ids: Vec<&str> = outcomes.iter().map(|o| o.endpoint_id().as_str()).collect();
    assert_eq!(ids, ["DS004-01", "DS004-02"]);
    assert_eq!(
        api.operations(),
        [
            Operation::ShareholderGetMajorStock,
            Operation::ShareholderGetExecutiveStock
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_full_run_covers_every_endpoint() {
    let api = Arc::new(MockApi::new().always(
        Operation::DisclosureSearch,
        MockResponse::Disclosures(vec!["20240312000736"]),
    ));
    let mut verifier = EndpointVerifier::new(api.clone()).with_rate_limiter(fast_limiter());

    let outcomes = verifier.verify_all(None).await;

    assert_eq!(outcomes.len(), 30);
    let registry = Registry::opendart();
    for (outcome, spec) in outcomes.iter().zip(registry.iter()) {
        assert_eq!(outcome.endpoint_id(), spec.id());
        assert_eq!(outcome.endpoint_name(), spec.name());
    }
    assert!(
        outcomes
            .iter()
            .all(|o| *o.status() == VerificationStatus::Success)
    );
    assert_eq!(api.call_count(), 30);
    assert_eq!(*verifier.rate_limiter().request_count(), 30);
}

#[tokio::test(start_paused = true)]
async fn test_test_data_fills_call_arguments() {
    let api = Arc::new(MockApi::new());
    let test_data = TestData {
        corp_code: "00164779".to_string(),
        ..TestData::default()
    };
    let mut verifier = EndpointVerifier::new(api.clone())
        .with_registry(single("DS003-01"))
        .with_test_data(test_data);

    verifier.verify_endpoint("DS003-01").await;

    let params = api
        .last_params(Operation::FinancialGetSingleAccount)
        .expect("call recorded");
    assert_eq!(params.get(Param::CorpCode), Some("00164779"));
    assert_eq!(params.get(Param::BsnsYear), Some("2023"));
    assert_eq!(params.get(Param::ReprtCode), Some("11011"));
    assert_eq!(params.get(Param::FsDiv), Some("CFS"));
    assert_eq!(params.len(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_consecutive_calls_are_paced() {
    let api = Arc::new(MockApi::new());
    let mut verifier = EndpointVerifier::new(api.clone());

    let started = tokio::time::Instant::now();
    let outcomes = verifier.verify_category("DS004").await;

    assert_eq!(outcomes.len(), 2);
    // Success decay is clamped at the 0.5s floor, so the second call waits it out
    assert!(started.elapsed() >= Duration::from_millis(500));
}
