//! Response decoding errors.

/// A response body that did not match the expected shape.
///
/// Records the endpoint path so a decode failure points at the endpoint
/// that produced it.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: cannot decode {} ({}) at line {} in {}", path, message, line, file)]
pub struct JsonError {
    /// Endpoint path, e.g. `/api/list.json`
    pub path: String,
    /// Decoder message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// A decode failure for the response of `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use opendart_error::JsonError;
    ///
    /// let err = JsonError::new("/api/company.json", "missing field `corp_name`");
    /// assert_eq!(err.path, "/api/company.json");
    /// assert!(err.to_string().contains("cannot decode /api/company.json"));
    /// ```
    #[track_caller]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            path: path.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
