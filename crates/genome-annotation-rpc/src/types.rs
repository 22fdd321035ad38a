//! Wire types for the JSON-RPC 1.1 exchange

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, RpcError};

/// Protocol version carried by every request envelope
pub const PROTOCOL_VERSION: &str = "1.1";

/// Content type of request bodies
pub const CONTENT_TYPE_JSON: &str = "application/json";

// ============================================================================
// Domain Objects
// ============================================================================

/// A genome typed object. Opaque to the client.
pub type GenomeTO = Value;

/// A metabolic reconstruction typed object. Opaque to the client.
pub type ReconstructionTO = Value;

// ============================================================================
// Envelope
// ============================================================================

/// Request envelope sent as the body of every call
///
/// Built fresh per call. Field order matches what the service emits:
/// `params`, `method`, `version`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcEnvelope {
    pub params: Vec<Value>,
    pub method: String,
    pub version: String,
}

impl RpcEnvelope {
    /// Create an envelope for a fully qualified method name
    pub fn new(method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            params,
            method: method.into(),
            version: PROTOCOL_VERSION.to_string(),
        }
    }

    /// Serialize the envelope to JSON text
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Response body returned by the service
///
/// Either key may be missing. Anything else in the body is ignored, and a
/// body that is JSON but not an object carries neither.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl RpcResponseBody {
    /// Parse a response body from JSON text
    ///
    /// Fails only when the text is not JSON at all.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(value))
    }

    /// Pick `result` and `error` out of a decoded body
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => Self {
                result: fields.remove("result").filter(|v| !v.is_null()),
                error: fields.remove("error").filter(|v| !v.is_null()),
            },
            _ => Self::default(),
        }
    }

    /// Take the error payload, `null` when the server sent none
    pub fn into_error(self) -> Value {
        self.error.unwrap_or(Value::Null)
    }
}

// ============================================================================
// Result Arity
// ============================================================================

/// Declared number of values an operation returns
///
/// The service always wraps results in a sequence. Operations returning a
/// single value are unwrapped to that value; all others hand back the
/// sequence as sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResultArity(pub usize);

impl ResultArity {
    /// Exactly one returned value
    pub const SINGLE: ResultArity = ResultArity(1);

    pub fn is_single(&self) -> bool {
        self.0 == 1
    }

    /// Apply the arity to a `result` value
    pub fn unwrap(&self, result: Value) -> Result<Value> {
        if !self.is_single() {
            return Ok(result);
        }

        match result {
            Value::Array(mut values) if !values.is_empty() => Ok(values.swap_remove(0)),
            Value::Array(_) => Err(RpcError::UnexpectedResult(
                "expected one result value, got an empty list".to_string(),
            )),
            other => Err(RpcError::UnexpectedResult(format!(
                "expected a result list, got {}",
                other
            ))),
        }
    }
}

impl Default for ResultArity {
    fn default() -> Self {
        Self::SINGLE
    }
}
