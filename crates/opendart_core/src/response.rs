//! Response envelopes shared by every JSON endpoint.

use serde::{Deserialize, Serialize};

/// The `status`/`message` pair present on every JSON response.
///
/// Decoded before the typed body so that error statuses, which usually
/// omit the body fields, never surface as decode failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEnvelope {
    /// Three-digit status code
    pub status: String,
    /// Status message
    #[serde(default)]
    pub message: Option<String>,
}

/// A list response: `{status, message, list: [...]}`.
///
/// # Examples
///
/// ```
/// use opendart_core::{Disclosure, ListResponse};
///
/// let body = r#"{"status":"000","message":"정상","list":[{"corp_code":"00126380","corp_name":"삼성전자"}]}"#;
/// let response: ListResponse<Disclosure> = serde_json::from_str(body).unwrap();
/// assert_eq!(response.items.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Three-digit status code
    pub status: String,
    /// Status message
    #[serde(default)]
    pub message: Option<String>,
    /// Page number (search only)
    #[serde(default)]
    pub page_no: Option<u32>,
    /// Page size (search only)
    #[serde(default)]
    pub page_count: Option<u32>,
    /// Total result count (search only)
    #[serde(default)]
    pub total_count: Option<u32>,
    /// Total page count (search only)
    #[serde(default)]
    pub total_page: Option<u32>,
    /// The records
    #[serde(rename = "list", default = "Vec::new")]
    pub items: Vec<T>,
}
