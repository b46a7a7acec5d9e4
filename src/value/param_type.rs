use serde::{Deserialize, Serialize};

/// Statically-declared parameter type of a service method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamType {
    Bool,
    I32,
    I64,
    F32,
    F64,
    String,
    Seq,
    Map,
}

impl ParamType {
    /// Opaque type-description token attached to internal requests so the
    /// dispatch/serialization layer can disambiguate overloads at the wire
    /// level if it ever needs to.
    pub fn descriptor(&self) -> &'static str {
        match self {
            ParamType::Bool => "bool",
            ParamType::I32 => "i32",
            ParamType::I64 => "i64",
            ParamType::F32 => "f32",
            ParamType::F64 => "f64",
            ParamType::String => "string",
            ParamType::Seq => "seq",
            ParamType::Map => "map",
        }
    }
}
