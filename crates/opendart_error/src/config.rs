//! Configuration error types.

use std::fmt;

/// Configuration that could not be loaded or is unusable.
///
/// Covers unreadable layers, values that fail validation and a missing API
/// key. When a single setting is at fault it is named in `setting`.
#[derive(Debug, Clone, derive_more::Error)]
pub struct ConfigError {
    /// Offending setting, e.g. `timeout_secs` or `rate_limit`
    pub setting: Option<String>,
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// A configuration failure not tied to one setting.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            setting: None,
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// A failure caused by one setting.
    ///
    /// # Examples
    ///
    /// ```
    /// use opendart_error::ConfigError;
    ///
    /// let err = ConfigError::for_setting("timeout_secs", "must be at least 1");
    /// assert_eq!(err.setting.as_deref(), Some("timeout_secs"));
    /// assert!(err.to_string().starts_with("Configuration Error: timeout_secs: must be at least 1"));
    /// ```
    #[track_caller]
    pub fn for_setting(setting: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            setting: Some(setting.into()),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration Error: ")?;
        if let Some(setting) = &self.setting {
            write!(f, "{}: ", setting)?;
        }
        write!(f, "{} at line {} in {}", self.message, self.line, self.file)
    }
}
