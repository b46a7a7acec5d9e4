/// The slice of a service registration URL this adapter consumes.
///
/// The registry owns the full URL; only the `group` and `path` attributes
/// participate in default routing-path derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationUrl {
    pub group: String,
    pub path: String,
}

impl RegistrationUrl {
    pub fn new(group: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            path: path.into(),
        }
    }
}
