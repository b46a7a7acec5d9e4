mod adapter_error;
mod argument_coercer;
mod message_translator;
mod method_resolver;
mod path_resolver;

pub use adapter_error::AdapterError;
pub use argument_coercer::coerce_arguments;
pub use message_translator::{
    build_error_reply, translate_inbound, translate_inbound_reply, translate_outbound_call,
    translate_outbound_reply,
};
pub use method_resolver::resolve_method;
pub use path_resolver::resolve_path;
