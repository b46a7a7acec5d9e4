use std::fmt;

/// Errors raised while registering a service contract.
#[derive(Debug, Clone, PartialEq)]
pub enum DescriptorError {
    /// Two methods share a case-insensitive name and arity. An untyped caller
    /// can never disambiguate them, so the contract is rejected up front
    /// instead of letting the first declared method silently win per call.
    AmbiguousSignature { method: String, arity: usize },
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorError::AmbiguousSignature { method, arity } => write!(
                f,
                "ambiguous signature: more than one method named {} (case-insensitive) takes {} argument(s)",
                method, arity
            ),
        }
    }
}

impl std::error::Error for DescriptorError {}
