mod business_failure;
mod internal_request;
mod internal_response;
mod raw_call_message;
mod raw_reply_message;
mod reply_status;

pub use business_failure::BusinessFailure;
pub use internal_request::InternalRequest;
pub use internal_response::InternalResponse;
pub use raw_call_message::RawCallMessage;
pub use raw_reply_message::RawReplyMessage;
pub use reply_status::ReplyStatus;
