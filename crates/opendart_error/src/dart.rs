//! OpenDART status codes and the upstream error taxonomy.
//!
//! Every JSON response carries a three-digit `status` field. `000` means success;
//! anything else is mapped onto a [`DartErrorKind`] through its [`StatusClass`].

/// Status codes documented by the OpenDART API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatusCode {
    /// 000: normal response
    Success,
    /// 010: unregistered key
    UnregisteredKey,
    /// 011: key not usable
    InactiveKey,
    /// 012: invalid key (IP not allowed)
    InvalidKey,
    /// 013: temporary usage restriction
    UsageLimitExceeded,
    /// 014: daily field quota exceeded
    DailyLimitExceededField,
    /// 015: daily request quota exceeded
    DailyLimitExceededRequests,
    /// 016: monthly quota exceeded
    MonthlyLimitExceeded,
    /// 020: invalid parameter
    InvalidParameter,
    /// 021: required parameter missing
    MissingRequiredParameter,
    /// 022: invalid report code
    InvalidReportCode,
    /// 023: invalid date
    InvalidDate,
    /// 100: no matching data
    NoData,
    /// 101: file not found
    FileNotFound,
    /// 800: system error
    SystemError,
    /// 900: under maintenance
    Maintenance,
    /// 999: unknown error
    Unknown,
}

impl StatusCode {
    /// Parse a wire status code. Returns `None` for undocumented codes.
    pub fn from_code(code: &str) -> Option<Self> {
        let status = match code {
            "000" => Self::Success,
            "010" => Self::UnregisteredKey,
            "011" => Self::InactiveKey,
            "012" => Self::InvalidKey,
            "013" => Self::UsageLimitExceeded,
            "014" => Self::DailyLimitExceededField,
            "015" => Self::DailyLimitExceededRequests,
            "016" => Self::MonthlyLimitExceeded,
            "020" => Self::InvalidParameter,
            "021" => Self::MissingRequiredParameter,
            "022" => Self::InvalidReportCode,
            "023" => Self::InvalidDate,
            "100" => Self::NoData,
            "101" => Self::FileNotFound,
            "800" => Self::SystemError,
            "900" => Self::Maintenance,
            "999" => Self::Unknown,
            _ => return None,
        };
        Some(status)
    }

    /// The three-digit wire code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Success => "000",
            Self::UnregisteredKey => "010",
            Self::InactiveKey => "011",
            Self::InvalidKey => "012",
            Self::UsageLimitExceeded => "013",
            Self::DailyLimitExceededField => "014",
            Self::DailyLimitExceededRequests => "015",
            Self::MonthlyLimitExceeded => "016",
            Self::InvalidParameter => "020",
            Self::MissingRequiredParameter => "021",
            Self::InvalidReportCode => "022",
            Self::InvalidDate => "023",
            Self::NoData => "100",
            Self::FileNotFound => "101",
            Self::SystemError => "800",
            Self::Maintenance => "900",
            Self::Unknown => "999",
        }
    }

    /// Default message the service documents for this status.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "정상",
            Self::UnregisteredKey => "등록되지 않은 키",
            Self::InactiveKey => "사용할 수 없는 키",
            Self::InvalidKey => "잘못된 키",
            Self::UsageLimitExceeded => "일시적 사용 제한",
            Self::DailyLimitExceededField => "필드 일일 조회 한도 초과",
            Self::DailyLimitExceededRequests => "요청 일일 한도 초과",
            Self::MonthlyLimitExceeded => "월간 조회 한도 초과",
            Self::InvalidParameter => "잘못된 파라미터",
            Self::MissingRequiredParameter => "필수 파라미터 누락",
            Self::InvalidReportCode => "잘못된 보고서 코드",
            Self::InvalidDate => "잘못된 날짜",
            Self::NoData => "조회된 데이터 없음",
            Self::FileNotFound => "파일 없음",
            Self::SystemError => "시스템 오류",
            Self::Maintenance => "시스템 점검",
            Self::Unknown => "알 수 없는 오류",
        }
    }

    /// Error class of this status. `None` for success.
    pub fn class(&self) -> Option<StatusClass> {
        match self {
            Self::Success => None,
            Self::UnregisteredKey | Self::InactiveKey | Self::InvalidKey => {
                Some(StatusClass::Authentication)
            }
            Self::UsageLimitExceeded
            | Self::DailyLimitExceededField
            | Self::DailyLimitExceededRequests
            | Self::MonthlyLimitExceeded => Some(StatusClass::RateLimit),
            Self::InvalidParameter
            | Self::MissingRequiredParameter
            | Self::InvalidReportCode
            | Self::InvalidDate => Some(StatusClass::Validation),
            Self::NoData | Self::FileNotFound => Some(StatusClass::NotFound),
            Self::SystemError | Self::Maintenance => Some(StatusClass::Server),
            Self::Unknown => Some(StatusClass::Api),
        }
    }
}

/// Coarse classification of a non-success status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StatusClass {
    /// Key problems (010, 011, 012)
    #[display("authentication")]
    Authentication,
    /// Usage quota exceeded (013 to 016)
    #[display("rate limit")]
    RateLimit,
    /// Request parameters rejected (020 to 023)
    #[display("validation")]
    Validation,
    /// No data or file (100, 101)
    #[display("not found")]
    NotFound,
    /// Upstream outage (800, 900)
    #[display("server")]
    Server,
    /// Any other status
    #[display("api")]
    Api,
}

/// Upstream error conditions reported through the `status` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DartErrorKind {
    /// Key rejected
    #[display("Authentication failed ({}): {}", status, message)]
    Authentication {
        /// Wire status code
        status: String,
        /// Upstream message
        message: String,
    },
    /// Caller throttled
    #[display("Rate limit exceeded ({}): {}", status, message)]
    RateLimit {
        /// Wire status code
        status: String,
        /// Upstream message
        message: String,
    },
    /// Parameters rejected
    #[display("Validation failed ({}): {}", status, message)]
    Validation {
        /// Wire status code
        status: String,
        /// Upstream message
        message: String,
    },
    /// Nothing matched the query
    #[display("No data ({}): {}", status, message)]
    NotFound {
        /// Wire status code
        status: String,
        /// Upstream message
        message: String,
    },
    /// Upstream system error or maintenance
    #[display("Server error ({}): {}", status, message)]
    Server {
        /// Wire status code
        status: String,
        /// Upstream message
        message: String,
    },
    /// Any other non-success status
    #[display("API error ({}): {}", status, message)]
    Api {
        /// Wire status code
        status: String,
        /// Upstream message
        message: String,
    },
}

impl DartErrorKind {
    /// Build the error kind for a non-success wire status.
    ///
    /// When `message` is absent the documented default message is used.
    ///
    /// # Examples
    ///
    /// ```
    /// use opendart_error::{DartErrorKind, StatusClass};
    ///
    /// let kind = DartErrorKind::from_status("100", None);
    /// assert_eq!(kind.class(), StatusClass::NotFound);
    /// assert_eq!(kind.message(), "조회된 데이터 없음");
    ///
    /// let kind = DartErrorKind::from_status("013", Some("slow down"));
    /// assert_eq!(kind.class(), StatusClass::RateLimit);
    /// assert_eq!(kind.status(), "013");
    /// ```
    pub fn from_status(status: &str, message: Option<&str>) -> Self {
        let known = StatusCode::from_code(status);
        let class = known
            .and_then(|code| code.class())
            .unwrap_or(StatusClass::Api);
        let message = match message {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => known
                .map(|code| code.message())
                .unwrap_or(StatusCode::Unknown.message())
                .to_string(),
        };
        let status = status.to_string();

        match class {
            StatusClass::Authentication => Self::Authentication { status, message },
            StatusClass::RateLimit => Self::RateLimit { status, message },
            StatusClass::Validation => Self::Validation { status, message },
            StatusClass::NotFound => Self::NotFound { status, message },
            StatusClass::Server => Self::Server { status, message },
            StatusClass::Api => Self::Api { status, message },
        }
    }

    /// Classification of this error.
    pub fn class(&self) -> StatusClass {
        match self {
            Self::Authentication { .. } => StatusClass::Authentication,
            Self::RateLimit { .. } => StatusClass::RateLimit,
            Self::Validation { .. } => StatusClass::Validation,
            Self::NotFound { .. } => StatusClass::NotFound,
            Self::Server { .. } => StatusClass::Server,
            Self::Api { .. } => StatusClass::Api,
        }
    }

    /// Wire status code.
    pub fn status(&self) -> &str {
        match self {
            Self::Authentication { status, .. }
            | Self::RateLimit { status, .. }
            | Self::Validation { status, .. }
            | Self::NotFound { status, .. }
            | Self::Server { status, .. }
            | Self::Api { status, .. } => status,
        }
    }

    /// Upstream (or default) message.
    pub fn message(&self) -> &str {
        match self {
            Self::Authentication { message, .. }
            | Self::RateLimit { message, .. }
            | Self::Validation { message, .. }
            | Self::NotFound { message, .. }
            | Self::Server { message, .. }
            | Self::Api { message, .. } => message,
        }
    }
}

/// OpenDART status error with source location tracking.
///
/// # Examples
///
/// ```
/// use opendart_error::{DartError, DartErrorKind};
///
/// let err = DartError::new(DartErrorKind::from_status("020", None));
/// assert!(format!("{}", err).contains("Validation failed (020)"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("OpenDART Error: {} at line {} in {}", kind, line, file)]
pub struct DartError {
    /// The kind of error that occurred
    pub kind: DartErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DartError {
    /// Create a new DartError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DartErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Check a wire status, returning an error for anything but `000`.
    ///
    /// # Examples
    ///
    /// ```
    /// use opendart_error::DartError;
    ///
    /// assert!(DartError::check_status("000", Some("정상")).is_ok());
    /// assert!(DartError::check_status("101", None).is_err());
    /// ```
    #[track_caller]
    pub fn check_status(status: &str, message: Option<&str>) -> Result<(), Self> {
        if status == StatusCode::Success.code() {
            return Ok(());
        }
        Err(Self::new(DartErrorKind::from_status(status, message)))
    }
}
