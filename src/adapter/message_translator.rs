use super::{AdapterError, coerce_arguments, resolve_method};
use crate::descriptor::ServiceDescriptor;
use crate::message::{
    BusinessFailure, InternalRequest, InternalResponse, RawCallMessage, RawReplyMessage,
    ReplyStatus,
};
use crate::value::Value;

/// Converts an inbound raw call into a dispatch-ready internal request.
///
/// Resolution uses the caller's method name and argument count only; the
/// resolved signature supplies the canonical method spelling and the declared
/// parameter types the arguments are coerced against. A resolution failure
/// aborts the whole translation; no partially-populated request is ever
/// handed downstream.
pub fn translate_inbound(
    raw_call: RawCallMessage,
    descriptor: &ServiceDescriptor,
) -> Result<InternalRequest, AdapterError> {
    let signature = resolve_method(descriptor, &raw_call.method_name, raw_call.arguments.len())?;

    let method_name = signature.name.clone();
    let param_desc = signature.param_desc();
    let arguments = coerce_arguments(raw_call.arguments, &signature.param_types);

    tracing::debug!(
        "Translated call {} to {}::{}",
        raw_call.call_id,
        descriptor.interface_id(),
        method_name
    );

    Ok(InternalRequest {
        interface_id: descriptor.interface_id().to_string(),
        method_name,
        call_id: raw_call.call_id,
        arguments,
        param_desc,
    })
}

/// Builds an outbound raw call from an internal request, for the reverse
/// direction where this adapter acts as the caller.
///
/// Arguments are forwarded unchanged; a weakly-typed callee needs no
/// narrowing.
pub fn translate_outbound_call(
    request: InternalRequest,
    format_tag: impl Into<String>,
) -> RawCallMessage {
    RawCallMessage {
        call_id: request.call_id,
        method_name: request.method_name,
        arguments: request.arguments,
        format_tag: format_tag.into(),
    }
}

/// Flattens an internal response into a raw reply.
///
/// A failure with a non-blank display message wins over the result value, and
/// only its display message crosses the boundary; structured detail stays on
/// this side. Business failures keep status `Ok` — they are application
/// results, not transport faults.
pub fn translate_outbound_reply(
    response: InternalResponse,
    format_tag: impl Into<String>,
) -> RawReplyMessage {
    let mut reply = RawReplyMessage {
        call_id: response.call_id,
        format_tag: format_tag.into(),
        result: Value::Null,
        error: String::new(),
        status: ReplyStatus::Ok,
    };

    match response.failure {
        Some(failure) if !failure.to_display_message().trim().is_empty() => {
            reply.error = failure.to_display_message().to_string();
        }
        _ => reply.result = response.value,
    }

    reply
}

/// Rebuilds an internal response from a raw reply, for the reverse direction
/// where this adapter receives a reply from a weakly-typed callee.
///
/// A non-blank error text always constructs a business failure, taking
/// precedence over any result value present.
pub fn translate_inbound_reply(raw_reply: RawReplyMessage) -> InternalResponse {
    let failure = if raw_reply.error.trim().is_empty() {
        None
    } else {
        Some(BusinessFailure::new(raw_reply.error))
    };

    InternalResponse {
        call_id: raw_reply.call_id,
        value: raw_reply.result,
        failure,
    }
}

/// Well-formed error reply for failures that occur before a call identifier
/// can be associated (e.g. method resolution). Call-id linkage is left to the
/// caller; the status is the fixed internal-failure code.
pub fn build_error_reply(
    message: impl Into<String>,
    format_tag: impl Into<String>,
) -> RawReplyMessage {
    RawReplyMessage {
        call_id: 0,
        format_tag: format_tag.into(),
        result: Value::Null,
        error: message.into(),
        status: ReplyStatus::InternalFailure,
    }
}
