use std::fmt;

/// Errors raised while translating an inbound call.
#[derive(Debug, Clone, PartialEq)]
pub enum AdapterError {
    /// No declared signature matches the caller's method name
    /// (case-insensitive) and argument count. Fatal to the current call; the
    /// runtime converts it into an error reply via `build_error_reply`.
    MethodNotFound { method: String, arity: usize },
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdapterError::MethodNotFound { method, arity } => write!(
                f,
                "cannot find request method {} taking {} argument(s)",
                method, arity
            ),
        }
    }
}

impl std::error::Error for AdapterError {}
