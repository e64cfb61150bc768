//! Trait definitions for OpenDART backends.

use crate::{Operation, Params, Payload};
use async_trait::async_trait;
use opendart_error::OpendartResult;

/// Anything that can execute an OpenDART operation.
///
/// Implementations must surface upstream statuses as
/// [`DartError`](opendart_error::DartError) so callers can tell throttling
/// and empty results apart from hard failures.
#[async_trait]
pub trait DartApi: Send + Sync {
    /// Execute `operation` with the given arguments.
    async fn invoke(&self, operation: Operation, params: &Params) -> OpendartResult<Payload>;
}

#[async_trait]
impl<T> DartApi for std::sync::Arc<T>
where
    T: DartApi + ?Sized,
{
    async fn invoke(&self, operation: Operation, params: &Params) -> OpendartResult<Payload> {
        (**self).invoke(operation, params).await
    }
}
