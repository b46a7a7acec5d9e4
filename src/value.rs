mod dynamic_value;
mod param_type;

pub use dynamic_value::Value;
pub use param_type::ParamType;
