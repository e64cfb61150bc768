//! Per-endpoint verification results.

use crate::EndpointSpec;
use opendart_interface::Payload;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::time::Duration;

/// Classification of one endpoint call.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::AsRefStr,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    /// The call returned data
    Success,
    /// The call worked but had nothing to return
    NoData,
    /// The call failed
    Failed,
    /// The call was never made
    Skipped,
}

/// Shape of a payload, without its contents.
///
/// Serializes as `{"type": "null"}`, `{"type": "bytes", "size": n}`,
/// `{"type": "list", "count": n}` or `{"type": "<record type>"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSummary {
    /// No value
    Null,
    /// Downloaded file
    Bytes {
        /// Length in bytes
        size: usize,
    },
    /// Record list
    List {
        /// Number of records
        count: usize,
    },
    /// Single record
    Record {
        /// Record type name
        type_name: &'static str,
    },
}

impl PayloadSummary {
    /// Summarize a payload.
    pub fn of(payload: &Payload) -> Self {
        match payload {
            Payload::Empty => Self::Null,
            Payload::Bytes(bytes) => Self::Bytes { size: bytes.len() },
            Payload::Records(items) => Self::List { count: items.len() },
            Payload::Record(record) => Self::Record {
                type_name: record.type_name(),
            },
        }
    }
}

impl Serialize for PayloadSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", "null")?;
                map.end()
            }
            Self::Bytes { size } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "bytes")?;
                map.serialize_entry("size", size)?;
                map.end()
            }
            Self::List { count } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "list")?;
                map.serialize_entry("count", count)?;
                map.end()
            }
            Self::Record { type_name } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", type_name)?;
                map.end()
            }
        }
    }
}

/// Result of verifying one endpoint in one run.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct VerificationOutcome {
    /// Endpoint identifier, or the requested id when unknown
    endpoint_id: String,
    /// Dotted operation name, `unknown` when the id is not registered
    endpoint_name: String,
    /// Category tag, `unknown` when the id is not registered
    category: String,
    /// Classification
    status: VerificationStatus,
    /// Time spent in the call, zero when never attempted
    response_time: Duration,
    /// Failure or no-data detail
    error_message: Option<String>,
    /// Payload shape on success
    response_data: Option<PayloadSummary>,
}

impl VerificationOutcome {
    /// Outcome for a registered endpoint.
    pub fn new(spec: &EndpointSpec, status: VerificationStatus) -> Self {
        Self {
            endpoint_id: spec.id().clone(),
            endpoint_name: spec.name().to_string(),
            category: spec.category().to_string(),
            status,
            response_time: Duration::ZERO,
            error_message: None,
            response_data: None,
        }
    }

    /// Failed outcome for an id that is not in the registry.
    pub fn unknown(endpoint_id: &str) -> Self {
        Self {
            endpoint_id: endpoint_id.to_string(),
            endpoint_name: "unknown".to_string(),
            category: "unknown".to_string(),
            status: VerificationStatus::Failed,
            response_time: Duration::ZERO,
            error_message: Some(format!("Unknown endpoint: {}", endpoint_id)),
            response_data: None,
        }
    }

    /// Attach the call duration.
    pub fn with_response_time(mut self, elapsed: Duration) -> Self {
        self.response_time = elapsed;
        self
    }

    /// Attach a detail message.
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Attach a payload summary.
    pub fn with_response_data(mut self, summary: PayloadSummary) -> Self {
        self.response_data = Some(summary);
        self
    }

    /// Call duration in fractional milliseconds.
    pub fn response_time_ms(&self) -> f64 {
        self.response_time.as_nanos() as f64 / 1_000_000.0
    }
}
