//! The endpoint verification loop.

use crate::{
    EndpointSpec, ParamSource, PayloadSummary, Registry, RuntimeVariable, TestData,
    VerificationOutcome, VerificationStatus, VerifierConfig,
};
use opendart_client::OpenDartClient;
use opendart_error::{ConfigError, OpendartError, OpendartErrorKind, OpendartResult};
use opendart_interface::{DartApi, Params, Payload};
use opendart_rate_limit::AdaptiveRateLimiter;
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Retries allowed after a throttled call unless configured otherwise.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Calls registry endpoints one at a time and classifies the results.
///
/// Runs are strictly sequential: one endpoint, one call, one pacing wait at a
/// time. The receipt number discovered by the disclosure search is kept for
/// the lifetime of the verifier and feeds later download endpoints.
pub struct EndpointVerifier<A> {
    api: A,
    registry: Registry,
    rate_limiter: AdaptiveRateLimiter,
    max_retries: u32,
    test_data: TestData,
    rcept_no: Option<String>,
}

impl EndpointVerifier<OpenDartClient> {
    /// Build a verifier around a live HTTP client.
    ///
    /// # Errors
    ///
    /// Fails when no API key is configured or the client cannot be built.
    pub fn from_config(config: &VerifierConfig) -> OpendartResult<Self> {
        let api_key = config.api_key().as_deref().ok_or_else(|| {
            OpendartError::from(ConfigError::for_setting(
                "api_key",
                "OpenDART API key is not configured (set OPENDART_API_KEY or pass --api-key)",
            ))
        })?;

        let mut builder = OpenDartClient::builder()
            .api_key(api_key)
            .timeout(config.timeout());
        if let Some(base_url) = config.base_url() {
            builder = builder.base_url(base_url.clone());
        }
        let client = builder.build()?;

        let rate_limiter = AdaptiveRateLimiter::new(*config.rate_limit())
            .map_err(|e| ConfigError::for_setting("rate_limit", e.to_string()))?;

        Ok(Self::new(client)
            .with_rate_limiter(rate_limiter)
            .with_max_retries(*config.max_retries())
            .with_test_data(config.test_data().clone()))
    }
}

impl<A: DartApi> EndpointVerifier<A> {
    /// Verifier over the full OpenDART registry with default pacing.
    pub fn new(api: A) -> Self {
        Self {
            api,
            registry: Registry::opendart(),
            rate_limiter: AdaptiveRateLimiter::default(),
            max_retries: DEFAULT_MAX_RETRIES,
            test_data: TestData::default(),
            rcept_no: None,
        }
    }

    /// Replace the registry.
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Replace the rate limiter.
    pub fn with_rate_limiter(mut self, rate_limiter: AdaptiveRateLimiter) -> Self {
        self.rate_limiter = rate_limiter;
        self
    }

    /// Replace the retry bound for throttled calls.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Replace the test data.
    pub fn with_test_data(mut self, test_data: TestData) -> Self {
        self.test_data = test_data;
        self
    }

    /// The backend being verified.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Endpoints this verifier knows.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Current pacing state.
    pub fn rate_limiter(&self) -> &AdaptiveRateLimiter {
        &self.rate_limiter
    }

    /// Receipt number discovered so far, if any.
    pub fn rcept_no(&self) -> Option<&str> {
        self.rcept_no.as_deref()
    }

    /// Verify a single endpoint by id.
    ///
    /// An id missing from the registry yields a failed outcome without any
    /// call.
    #[instrument(skip(self))]
    pub async fn verify_endpoint(&mut self, endpoint_id: &str) -> VerificationOutcome {
        let Some(spec) = self.registry.get(endpoint_id).cloned() else {
            warn!("Unknown endpoint");
            return VerificationOutcome::unknown(endpoint_id);
        };
        self.verify_with_retry(&spec).await
    }

    /// Verify every endpoint in one category, in registry order.
    pub async fn verify_category(&mut self, category: &str) -> Vec<VerificationOutcome> {
        self.verify_all(Some(category)).await
    }

    /// Verify the whole registry, optionally restricted to one category.
    #[instrument(skip(self))]
    pub async fn verify_all(&mut self, category: Option<&str>) -> Vec<VerificationOutcome> {
        let specs: Vec<EndpointSpec> = match category {
            Some(category) => self.registry.in_category(category).cloned().collect(),
            None => self.registry.iter().cloned().collect(),
        };
        debug!(count = specs.len(), "Verifying endpoints");

        let mut outcomes = Vec::with_capacity(specs.len());
        for spec in &specs {
            outcomes.push(self.verify_with_retry(spec).await);
        }

        let failed = outcomes
            .iter()
            .filter(|o| *o.status() == VerificationStatus::Failed)
            .count();
        info!(total = outcomes.len(), failed, "Verification run finished");
        outcomes
    }

    #[instrument(skip(self, spec), fields(endpoint = %spec.id(), operation = %spec.name()))]
    async fn verify_with_retry(&mut self, spec: &EndpointSpec) -> VerificationOutcome {
        if let Some(missing) = self.missing_runtime(spec) {
            debug!(%missing, "Skipping, runtime value not yet discovered");
            return VerificationOutcome::new(spec, VerificationStatus::Skipped)
                .with_error_message(format!("Requires {} from disclosure.search", missing));
        }

        let params = self.resolve_params(spec);
        let mut retries = 0;

        loop {
            self.rate_limiter.wait().await;

            let started = Instant::now();
            let result = self.api.invoke(*spec.operation(), &params).await;
            let elapsed = started.elapsed();

            match result {
                Ok(payload) => {
                    self.rate_limiter.on_success();
                    self.remember_receipt(spec, &payload);
                    let status = if payload.is_empty() {
                        VerificationStatus::NoData
                    } else {
                        VerificationStatus::Success
                    };
                    debug!(%status, elapsed_ms = elapsed.as_millis() as u64, "Endpoint answered");
                    return VerificationOutcome::new(spec, status)
                        .with_response_time(elapsed)
                        .with_response_data(PayloadSummary::of(&payload));
                }
                Err(e) if e.is_not_found() => {
                    self.rate_limiter.on_success();
                    debug!("Endpoint reported no data");
                    return VerificationOutcome::new(spec, VerificationStatus::NoData)
                        .with_response_time(elapsed)
                        .with_error_message(e.detail());
                }
                Err(e) if e.is_rate_limited() => {
                    self.rate_limiter.on_rate_limited();
                    if retries < self.max_retries {
                        retries += 1;
                        debug!(retries, "Retrying throttled call");
                        continue;
                    }
                    warn!(retries, "Giving up after repeated throttling");
                    return VerificationOutcome::new(spec, VerificationStatus::Failed)
                        .with_response_time(elapsed)
                        .with_error_message(format!(
                            "Rate limit: {} (after {} retries)",
                            e.detail(),
                            retries
                        ));
                }
                Err(e) => {
                    let message = failure_detail(&e);
                    warn!(error = %message, "Endpoint failed");
                    return VerificationOutcome::new(spec, VerificationStatus::Failed)
                        .with_response_time(elapsed)
                        .with_error_message(message);
                }
            }
        }
    }

    fn missing_runtime(&self, spec: &EndpointSpec) -> Option<RuntimeVariable> {
        spec.runtime_dependencies()
            .find(|var| self.runtime_value(*var).is_none())
    }

    fn runtime_value(&self, var: RuntimeVariable) -> Option<&str> {
        match var {
            RuntimeVariable::RceptNo => self.rcept_no.as_deref(),
        }
    }

    fn resolve_params(&self, spec: &EndpointSpec) -> Params {
        let mut params = Params::new();
        for (param, source) in spec.params() {
            let value = match source {
                ParamSource::Literal(value) => Some(value.as_str()),
                ParamSource::TestData => self.test_data.get(*param),
                ParamSource::Runtime(var) => self.runtime_value(*var),
            };
            // Left out when absent so the call fails as a missing parameter.
            if let Some(value) = value {
                params.insert(*param, value);
            }
        }
        params
    }

    fn remember_receipt(&mut self, spec: &EndpointSpec, payload: &Payload) {
        if !spec.operation().is_discovery() || self.rcept_no.is_some() {
            return;
        }
        if let Some(rcept_no) = payload.first_receipt_no() {
            debug!(rcept_no, "Discovered receipt number");
            self.rcept_no = Some(rcept_no.to_string());
        }
    }
}

fn failure_detail(error: &OpendartError) -> String {
    match error.kind() {
        OpendartErrorKind::Dart(err) if error.is_validation() => {
            format!("Validation error: {}", err.kind.message())
        }
        OpendartErrorKind::Dart(err) => {
            format!("API error ({}): {}", err.kind.status(), err.kind.message())
        }
        _ => error.detail(),
    }
}
