use super::ReplyStatus;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Outbound reply handed to the transport layer for encoding.
///
/// An empty `error` signals success. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawReplyMessage {
    /// Correlation token copied from the call. Zero when no call could be
    /// associated (see `build_error_reply`).
    pub call_id: u64,

    /// Wire encoding to use for this reply.
    pub format_tag: String,

    /// Result value on success; `Value::Null` otherwise.
    pub result: Value,

    /// Flat error text. Empty string signals success.
    pub error: String,

    pub status: ReplyStatus,
}
