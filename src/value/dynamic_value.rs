use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A value whose shape is known only at translation time.
///
/// A weakly-typed peer encodes numbers without a declared width, so its
/// decoder only ever produces `I64` and `F64` for numerics. `I32` and `F32`
/// exist so argument coercion can narrow a value to a declared parameter
/// width and the narrowing stays visible to downstream serialization.
///
/// Untagged: serialization mirrors the weak-typed wire (no variant names),
/// and declaration order is the deserialization preference, so the wide
/// numeric variants must come before the narrow ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    I32(i32),
    F32(f32),
    String(String),
    Seq(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Runtime type tag, for diagnostics only.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::I64(_) => "i64",
            Value::F64(_) => "f64",
            Value::I32(_) => "i32",
            Value::F32(_) => "f32",
            Value::String(_) => "string",
            Value::Seq(_) => "seq",
            Value::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}
