pub mod adapter;
pub mod constants;
pub mod descriptor;
pub mod message;
pub mod value;
