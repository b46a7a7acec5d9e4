use super::BusinessFailure;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Runtime-native response produced by the dispatch layer.
///
/// Read-only input to outbound translation. `failure` takes precedence over
/// `value` in the outbound mapping; on a void success both are empty
/// (`Value::Null`, `None`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalResponse {
    /// Correlation token of the call this responds to.
    pub call_id: u64,

    /// Result value. `Value::Null` on void success or failure.
    pub value: Value,

    /// Application-level failure, if the dispatched method reported one.
    pub failure: Option<BusinessFailure>,
}

impl InternalResponse {
    /// Successful response carrying `value`.
    pub fn success(call_id: u64, value: Value) -> Self {
        Self {
            call_id,
            value,
            failure: None,
        }
    }

    /// Failed response carrying only a business failure.
    pub fn failed(call_id: u64, failure: BusinessFailure) -> Self {
        Self {
            call_id,
            value: Value::Null,
            failure: Some(failure),
        }
    }
}
