//! Request parameter error types.

/// A required call argument was not supplied.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Parameter Error: missing required parameter `{}` for {} at line {} in {}", name, operation, line, file)]
pub struct ParamError {
    /// Name of the missing parameter
    pub name: String,
    /// Operation that required it
    pub operation: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ParamError {
    /// Create a new ParamError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use opendart_error::ParamError;
    ///
    /// let err = ParamError::missing("rcept_no", "disclosure.download_document");
    /// assert_eq!(err.name, "rcept_no");
    /// ```
    #[track_caller]
    pub fn missing(name: impl Into<String>, operation: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            name: name.into(),
            operation: operation.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
