mod descriptor_error;
mod method_signature;
mod registration_url;
mod service_descriptor;

pub use descriptor_error::DescriptorError;
pub use method_signature::MethodSignature;
pub use registration_url::RegistrationUrl;
pub use service_descriptor::ServiceDescriptor;
