// Data model for method-channel invocations and their responses

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single named method invocation dispatched by the host to a channel handler.
///
/// Created by the host per call, consumed synchronously, and discarded once the
/// response is produced. The argument payload is opaque to the dispatch layer;
/// handlers decide whether to interpret it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    /// The method name being invoked.
    pub method: String,
    /// Optional opaque argument payload. `None` and JSON `null` are both valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Value>,
}

impl MethodCall {
    /// Create an invocation with no argument payload.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: None,
        }
    }

    /// Create an invocation carrying an argument payload.
    pub fn with_arguments(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments: Some(arguments),
        }
    }
}

/// Outcome of handling a [`MethodCall`].
///
/// There are exactly two outcomes: a success value, or the not-implemented
/// signal for a method name the handler recognizes no behavior for. The latter
/// is a defined response, not an error, so no failure variant exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MethodResponse {
    /// The handler recognized the method and produced a value.
    Success {
        value: Value,
    },
    /// The handler recognizes no behavior for the given method name.
    NotImplemented,
}

impl MethodResponse {
    /// Build a success response from any serializable value.
    pub fn success(value: impl Into<Value>) -> Self {
        MethodResponse::Success {
            value: value.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MethodResponse::Success { .. })
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, MethodResponse::NotImplemented)
    }

    /// The success value, if this response is one.
    pub fn value(&self) -> Option<&Value> {
        match self {
            MethodResponse::Success { value } => Some(value),
            MethodResponse::NotImplemented => None,
        }
    }
}
