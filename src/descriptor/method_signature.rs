use crate::value::ParamType;
use serde::{Deserialize, Serialize};

/// A single declared method on a service contract: name, ordered parameter
/// types, and (implicitly) arity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodSignature {
    /// Canonical declared spelling. Callers may address it in any casing;
    /// translation always restores this form.
    pub name: String,

    /// Ordered declared parameter types.
    pub param_types: Vec<ParamType>,
}

impl MethodSignature {
    pub fn new(name: impl Into<String>, param_types: Vec<ParamType>) -> Self {
        Self {
            name: name.into(),
            param_types,
        }
    }

    pub fn arity(&self) -> usize {
        self.param_types.len()
    }

    /// Ordered opaque type-description tokens for the dispatch layer.
    pub fn param_desc(&self) -> Vec<String> {
        self.param_types
            .iter()
            .map(|t| t.descriptor().to_string())
            .collect()
    }
}
