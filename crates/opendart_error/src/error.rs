//! Top-level error wrapper types.

use crate::{ConfigError, DartError, HttpError, JsonError, ParamError, StatusClass};

/// Every failure an OpenDART call can produce.
///
/// # Examples
///
/// ```
/// use opendart_error::{HttpError, OpendartError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: OpendartError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum OpendartErrorKind {
    /// Non-success status reported by OpenDART
    #[from(DartError)]
    Dart(DartError),
    /// Transport failure
    #[from(HttpError)]
    Http(HttpError),
    /// Response body could not be decoded
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Missing call argument
    #[from(ParamError)]
    Param(ParamError),
}

/// OpenDART error with kind discrimination.
///
/// # Examples
///
/// ```
/// use opendart_error::{ConfigError, OpendartResult};
///
/// fn might_fail() -> OpendartResult<()> {
///     Err(ConfigError::new("OPENDART_API_KEY is not set"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("OpenDART Error: {}", _0)]
pub struct OpendartError(Box<OpendartErrorKind>);

impl OpendartError {
    /// Create a new error from a kind.
    pub fn new(kind: OpendartErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &OpendartErrorKind {
        &self.0
    }

    /// Status classification, present only for upstream status errors.
    pub fn status_class(&self) -> Option<StatusClass> {
        match self.kind() {
            OpendartErrorKind::Dart(err) => Some(err.kind.class()),
            _ => None,
        }
    }

    /// True for statuses 013 through 016.
    pub fn is_rate_limited(&self) -> bool {
        self.status_class() == Some(StatusClass::RateLimit)
    }

    /// True for statuses 100 and 101.
    pub fn is_not_found(&self) -> bool {
        self.status_class() == Some(StatusClass::NotFound)
    }

    /// True for statuses 020 through 023.
    pub fn is_validation(&self) -> bool {
        self.status_class() == Some(StatusClass::Validation)
    }

    /// Short human-readable description without source location.
    ///
    /// Upstream errors render as their status message, transport errors
    /// as their underlying message.
    pub fn detail(&self) -> String {
        match self.kind() {
            OpendartErrorKind::Dart(err) => err.kind.message().to_string(),
            OpendartErrorKind::Http(err) => err.message.clone(),
            OpendartErrorKind::Json(err) => format!("cannot decode {}: {}", err.path, err.message),
            OpendartErrorKind::Config(err) => match &err.setting {
                Some(setting) => format!("{}: {}", setting, err.message),
                None => err.message.clone(),
            },
            OpendartErrorKind::Param(err) => {
                format!("missing required parameter `{}` for {}", err.name, err.operation)
            }
        }
    }
}

// Generic From implementation for any type that converts to OpendartErrorKind
impl<T> From<T> for OpendartError
where
    T: Into<OpendartErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for OpenDART operations.
pub type OpendartResult<T> = std::result::Result<T, OpendartError>;
