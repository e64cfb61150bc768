//! HTTP transport error types.

/// HTTP error wrapping reqwest failures with source location.
///
/// Covers connection failures, timeouts, and non-success HTTP status codes.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", message, line, file)]
pub struct HttpError {
    /// The underlying error message
    pub message: String,
    /// HTTP status code, when the server answered
    pub status_code: Option<u16>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a new HttpError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use opendart_error::HttpError;
    ///
    /// let err = HttpError::new("Connection refused");
    /// assert!(err.message.contains("Connection refused"));
    /// assert_eq!(err.status_code, None);
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            status_code: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create an HttpError for a non-success HTTP status.
    ///
    /// # Examples
    ///
    /// ```
    /// use opendart_error::HttpError;
    ///
    /// let err = HttpError::with_status(503, "Service Unavailable");
    /// assert_eq!(err.status_code, Some(503));
    /// ```
    #[track_caller]
    pub fn with_status(status_code: u16, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            status_code: Some(status_code),
            line: location.line(),
            file: location.file(),
        }
    }
}
