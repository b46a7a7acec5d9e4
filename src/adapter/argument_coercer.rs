use crate::value::{ParamType, Value};

/// Adjusts each raw argument's runtime representation to its declared
/// parameter type, positionally.
///
/// A weakly-typed peer encodes every float as `F64` and every integer as
/// `I64`; the only corrections applied are the two width narrowings that such
/// a peer predictably produces against a declared 32-bit parameter. Every
/// other combination is forwarded untouched, and any residual incompatibility
/// is the dispatch layer's to report.
///
/// Elements are replaced in place; the input is consumed and returned.
/// Idempotent on an already-correctly-typed sequence.
pub fn coerce_arguments(mut arguments: Vec<Value>, param_types: &[ParamType]) -> Vec<Value> {
    for (argument, param_type) in arguments.iter_mut().zip(param_types) {
        match (&*argument, param_type) {
            (Value::F64(v), ParamType::F32) => *argument = Value::F32(*v as f32),
            (Value::I64(v), ParamType::I32) => *argument = Value::I32(*v as i32),
            _ => {}
        }
    }

    arguments
}
