use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Inbound call as decoded by the transport layer, before any type
/// information exists.
///
/// Consumed exactly once by translation; never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCallMessage {
    /// Opaque correlation token. Replies echo it back verbatim.
    pub call_id: u64,

    /// Method name as the caller spelled it. No case guarantee.
    pub method_name: String,

    /// Ordered raw argument values, each of dynamic runtime type.
    pub arguments: Vec<Value>,

    /// Identifies the wire encoding the call arrived in, so the reply can be
    /// encoded symmetrically.
    pub format_tag: String,
}
