use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Runtime-native request, ready for dispatch.
///
/// Built only by inbound translation; immutable once built and owned by the
/// surrounding runtime afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalRequest {
    /// Fully-qualified identity of the target interface.
    pub interface_id: String,

    /// Canonical declared spelling of the resolved method, not the caller's
    /// casing.
    pub method_name: String,

    /// Correlation token copied verbatim from the call.
    pub call_id: u64,

    /// Arguments, coerced to match the resolved signature.
    pub arguments: Vec<Value>,

    /// Ordered opaque descriptions of the resolved parameter types, for the
    /// downstream dispatch/serialization layer.
    pub param_desc: Vec<String>,
}
