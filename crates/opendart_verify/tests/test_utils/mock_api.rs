//! Mock OpenDART backend for testing.

use async_trait::async_trait;
use opendart_core::{Company, Disclosure, DividendInfo};
use opendart_error::{DartError, DartErrorKind, HttpError, OpendartError, OpendartResult};
use opendart_interface::{DartApi, Operation, Params, Payload};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A single scripted response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Disclosure list with the given receipt numbers
    Disclosures(Vec<&'static str>),
    /// List of `n` generic records
    Records(usize),
    /// Single company record
    Company,
    /// File download of `n` bytes
    Bytes(usize),
    /// Nothing at all
    Empty,
    /// Upstream status code such as `"013"`
    Status(&'static str),
    /// Transport failure
    Transport(&'static str),
}

/// Behavior configuration for one operation.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always answer the same way
    Always(MockResponse),
    /// Answer in order; calls beyond the end fail
    Sequence(Vec<MockResponse>),
}

/// Mock backend.
///
/// Operations without a configured behavior answer with one generic record.
/// Every call is recorded so tests can assert on what was sent.
pub struct MockApi {
    behaviors: HashMap<Operation, MockBehavior>,
    call_count: Arc<Mutex<usize>>,
    calls: Arc<Mutex<Vec<(Operation, Params)>>>,
    sequence_positions: Mutex<HashMap<Operation, usize>>,
}

impl MockApi {
    /// Mock where every operation succeeds with one record.
    pub fn new() -> Self {
        Self {
            behaviors: HashMap::new(),
            call_count: Arc::new(Mutex::new(0)),
            calls: Arc::new(Mutex::new(Vec::new())),
            sequence_positions: Mutex::new(HashMap::new()),
        }
    }

    /// Configure one operation.
    pub fn on(mut self, operation: Operation, behavior: MockBehavior) -> Self {
        self.behaviors.insert(operation, behavior);
        self
    }

    /// Configure one operation to always answer `response`.
    pub fn always(self, operation: Operation, response: MockResponse) -> Self {
        self.on(operation, MockBehavior::Always(response))
    }

    /// Total number of invoke() calls.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Number of invoke() calls for one operation.
    pub fn calls_to(&self, operation: Operation) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(op, _)| *op == operation)
            .count()
    }

    /// Operations invoked, in call order.
    pub fn operations(&self) -> Vec<Operation> {
        self.calls.lock().unwrap().iter().map(|(op, _)| *op).collect()
    }

    /// Arguments of the most recent call to `operation`.
    pub fn last_params(&self, operation: Operation) -> Option<Params> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(op, _)| *op == operation)
            .map(|(_, params)| params.clone())
    }

    fn next_response(&self, operation: Operation) -> Option<MockResponse> {
        match self.behaviors.get(&operation) {
            None => Some(MockResponse::Records(1)),
            Some(MockBehavior::Always(response)) => Some(response.clone()),
            Some(MockBehavior::Sequence(responses)) => {
                let mut positions = self.sequence_positions.lock().unwrap();
                let position = positions.entry(operation).or_insert(0);
                let response = responses.get(*position).cloned();
                *position += 1;
                response
            }
        }
    }
}

#[async_trait]
impl DartApi for MockApi {
    async fn invoke(&self, operation: Operation, params: &Params) -> OpendartResult<Payload> {
        *self.call_count.lock().unwrap() += 1;
        self.calls.lock().unwrap().push((operation, params.clone()));

        let Some(response) = self.next_response(operation) else {
            return Err(HttpError::new("Mock sequence exhausted").into());
        };

        match response {
            MockResponse::Disclosures(receipts) => Ok(Payload::records(
                receipts
                    .into_iter()
                    .map(|no| Disclosure {
                        rcept_no: Some(no.to_string()),
                        ..Default::default()
                    })
                    .collect(),
            )),
            MockResponse::Records(count) => {
                Ok(Payload::records(vec![DividendInfo::default(); count]))
            }
            MockResponse::Company => Ok(Payload::record(Company::default())),
            MockResponse::Bytes(size) => Ok(Payload::Bytes(vec![0x50; size])),
            MockResponse::Empty => Ok(Payload::Empty),
            MockResponse::Status(code) => Err(OpendartError::from(DartError::new(
                DartErrorKind::from_status(code, None),
            ))),
            MockResponse::Transport(message) => Err(HttpError::new(message).into()),
        }
    }
}
