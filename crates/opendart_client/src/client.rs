//! The shared HTTP connection and request plumbing.

use crate::services::{
    DisclosureService, FinancialService, MajorEventService, RegistrationService, ReportService,
    ShareholderService,
};
use opendart_core::{BASE_URL, ListResponse, StatusEnvelope};
use opendart_error::{ConfigError, DartError, HttpError, JsonError, OpendartResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Query parameter carrying the API key.
const API_KEY_PARAM: &str = "crtfc_key";

/// OpenDART API client.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct OpenDartClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl OpenDartClient {
    /// Create a client for the production API with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty or the HTTP client cannot be
    /// initialized.
    #[instrument(skip_all)]
    pub fn new(api_key: impl Into<String>) -> OpendartResult<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a client using the `OPENDART_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset or empty.
    #[instrument]
    pub fn from_env() -> OpendartResult<Self> {
        let api_key = std::env::var("OPENDART_API_KEY").map_err(|e| {
            ConfigError::for_setting("api_key", format!("OPENDART_API_KEY not set: {}", e))
        })?;
        Self::new(api_key)
    }

    /// Start building a client with non-default settings.
    pub fn builder() -> OpenDartClientBuilder {
        OpenDartClientBuilder::default()
    }

    /// Host the client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// DS001 disclosure endpoints.
    pub fn disclosure(&self) -> DisclosureService<'_> {
        DisclosureService::new(self)
    }

    /// DS002 periodic report endpoints.
    pub fn report(&self) -> ReportService<'_> {
        ReportService::new(self)
    }

    /// DS003 financial statement endpoints.
    pub fn financial(&self) -> FinancialService<'_> {
        FinancialService::new(self)
    }

    /// DS004 shareholding endpoints.
    pub fn shareholder(&self) -> ShareholderService<'_> {
        ShareholderService::new(self)
    }

    /// DS005 major event endpoints.
    pub fn major_event(&self) -> MajorEventService<'_> {
        MajorEventService::new(self)
    }

    /// DS006 securities registration endpoints.
    pub fn registration(&self) -> RegistrationService<'_> {
        RegistrationService::new(self)
    }

    /// GET a list endpoint and return its records.
    pub(crate) async fn get_list<T>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> OpendartResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let body = self.get_json_body(path, query).await?;
        let response: ListResponse<T> = serde_json::from_slice(&body).map_err(|e| {
            JsonError::new(path, e.to_string())
        })?;
        debug!(count = response.items.len(), "Decoded list response");
        Ok(response.items)
    }

    /// GET an endpoint whose record fields sit next to the status fields.
    pub(crate) async fn get_single<T>(&self, path: &str, query: &[(&str, String)]) -> OpendartResult<T>
    where
        T: DeserializeOwned,
    {
        let body = self.get_json_body(path, query).await?;
        let record = serde_json::from_slice(&body).map_err(|e| {
            JsonError::new(path, e.to_string())
        })?;
        Ok(record)
    }

    /// GET a file download and return the raw body.
    #[instrument(skip(self, query), fields(path = %path))]
    pub(crate) async fn get_bytes(&self, path: &str, query: &[(&str, String)]) -> OpendartResult<Vec<u8>> {
        let response = self.send(path, query).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| HttpError::new(format!("Failed to read {} body: {}", path, e)))?;
        debug!(size = bytes.len(), "Downloaded file");
        Ok(bytes.to_vec())
    }

    /// GET a JSON endpoint, failing on any non-`000` status.
    ///
    /// The status envelope is decoded before the typed body: error responses
    /// usually omit the body fields entirely.
    #[instrument(skip(self, query), fields(path = %path))]
    async fn get_json_body(&self, path: &str, query: &[(&str, String)]) -> OpendartResult<Vec<u8>> {
        let response = self.send(path, query).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::new(format!("Failed to read {} body: {}", path, e)))?;

        let envelope: StatusEnvelope = serde_json::from_slice(&body).map_err(|e| {
            JsonError::new(path, format!("status envelope: {}", e))
        })?;
        debug!(status = %envelope.status, "Received status");
        DartError::check_status(&envelope.status, envelope.message.as_deref())?;

        Ok(body.to_vec())
    }

    /// Send a GET with the API key attached and check the HTTP status.
    async fn send(&self, path: &str, query: &[(&str, String)]) -> OpendartResult<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, params = query.len(), "Sending OpenDART request");

        let response = self
            .http
            .get(&url)
            .query(&[(API_KEY_PARAM, self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    HttpError::new(format!("Request to {} timed out: {}", path, e))
                } else {
                    HttpError::new(format!("Request to {} failed: {}", path, e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(HttpError::with_status(
                status.as_u16(),
                format!("{} returned {}: {}", path, status, error_text),
            )
            .into());
        }

        Ok(response)
    }
}

/// Builder for [`OpenDartClient`].
///
/// # Examples
///
/// ```
/// use opendart_client::OpenDartClient;
/// use std::time::Duration;
///
/// let client = OpenDartClient::builder()
///     .api_key("test-key")
///     .base_url("http://localhost:8080/")
///     .timeout(Duration::from_secs(5))
///     .build()
///     .unwrap();
/// assert_eq!(client.base_url(), "http://localhost:8080");
///
/// assert!(OpenDartClient::builder().api_key("  ").build().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OpenDartClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl OpenDartClientBuilder {
    /// API key issued by OpenDART.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the API host, e.g. for a local mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or blank, or if the HTTP
    /// client cannot be initialized.
    pub fn build(self) -> OpendartResult<OpenDartClient> {
        let api_key = self
            .api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                ConfigError::for_setting(
                    "api_key",
                    "API key is required. Provide an api_key or set OPENDART_API_KEY.",
                )
            })?;

        let http = Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(OpenDartClient {
            http,
            api_key,
            base_url,
        })
    }
}
