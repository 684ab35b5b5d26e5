use crate::models::invocation::{MethodCall, MethodResponse};

/// Errors produced while decoding a request envelope.
///
/// These surface at the host boundary only; a plugin handler never sees a
/// malformed envelope because dispatch requires a decoded [`MethodCall`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("malformed envelope: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid envelope: {0}")]
    InvalidEnvelope(String),
}

/// Decode a JSON request envelope into a [`MethodCall`].
///
/// The envelope shape is `{"method": <string>, "arguments": <any, optional>}`.
/// An empty method name decodes successfully; whether a handler recognizes it
/// is a dispatch concern, not a codec one.
pub fn decode_method_call(bytes: &[u8]) -> Result<MethodCall, CodecError> {
    let envelope: serde_json::Value = serde_json::from_slice(bytes)?;

    if !envelope.is_object() {
        return Err(CodecError::InvalidEnvelope(
            "request envelope must be a JSON object".to_string(),
        ));
    }

    match envelope.get("method") {
        Some(method) if method.is_string() => {}
        Some(_) => {
            return Err(CodecError::InvalidEnvelope(
                "method field must be a string".to_string(),
            ));
        }
        None => {
            return Err(CodecError::InvalidEnvelope(
                "missing method field".to_string(),
            ));
        }
    }

    Ok(serde_json::from_value(envelope)?)
}

/// Encode a [`MethodResponse`] into its JSON response envelope.
///
/// Both variants serialize to a fixed object shape, so encoding cannot fail.
pub fn encode_response(response: &MethodResponse) -> Vec<u8> {
    serde_json::to_vec(response).unwrap_or_else(|_| br#"{"status":"not_implemented"}"#.to_vec())
}
