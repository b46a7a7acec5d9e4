use crate::descriptor::{RegistrationUrl, ServiceDescriptor};

/// Derives the routing path for a registered service.
///
/// An explicit, non-blank configured path is returned verbatim. Otherwise the
/// default is the literal concatenation `/{group}/{path}` of the registration
/// URL attributes, with no normalization: group `g` and path `/p` route at
/// `/g//p`.
///
/// Consulted once per service registration, not per call.
pub fn resolve_path(descriptor: &ServiceDescriptor, url: &RegistrationUrl) -> String {
    if let Some(path) = descriptor.configured_path() {
        if !path.trim().is_empty() {
            return path.to_string();
        }
    }

    format!("/{}/{}", url.group, url.path)
}
