use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// Status code carried on a raw reply.
///
/// Business failures keep `Ok` with a non-empty error text; `InternalFailure`
/// is reserved for replies built when translation itself failed before any
/// call could be dispatched.
#[repr(u16)]
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, TryFromPrimitive, IntoPrimitive, Serialize, Deserialize,
)]
pub enum ReplyStatus {
    Ok = 0,
    InternalFailure = 500,
}
