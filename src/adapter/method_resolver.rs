use super::AdapterError;
use crate::descriptor::{MethodSignature, ServiceDescriptor};

/// Selects the first declared signature whose name matches the caller's
/// spelling case-insensitively and whose arity equals the argument count.
///
/// Untyped callers cannot disambiguate overloads by parameter type, so
/// (name, arity) is the whole lookup key. Descriptors reject colliding keys
/// at registration, which keeps this unambiguous.
pub fn resolve_method<'a>(
    descriptor: &'a ServiceDescriptor,
    method_name: &str,
    argument_count: usize,
) -> Result<&'a MethodSignature, AdapterError> {
    match descriptor.lookup(method_name, argument_count) {
        Some(signature) => Ok(signature),
        None => {
            tracing::warn!(
                "No method on {} matches {}/{}",
                descriptor.interface_id(),
                method_name,
                argument_count
            );
            Err(AdapterError::MethodNotFound {
                method: method_name.to_string(),
                arity: argument_count,
            })
        }
    }
}
