//! Request and response envelopes for the Bravia JSON-RPC dialect
//!
//! The display speaks a JSON-RPC flavour without the `jsonrpc` member. Errors
//! come back as a two element `[code, message]` array instead of an object.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::RpcClientError;

/// A single method call. Fields serialize in wire order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcRequest {
    pub method: String,
    pub params: Vec<Value>,
    pub id: u32,
    pub version: String,
}

impl RpcRequest {
    pub fn new(
        method: impl Into<String>,
        params: Vec<Value>,
        id: u32,
        version: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            params,
            id,
            version: version.into(),
        }
    }

    /// Serialize the request into the exact body sent to the device
    pub fn to_body(&self) -> Result<String, RpcClientError> {
        serde_json::to_string(self).map_err(|e| RpcClientError::Parse(e.to_string()))
    }
}

/// A decoded response body
///
/// `result` and `error` are kept as raw JSON; the vendor shapes differ per
/// method and the client never reinterprets them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
}

impl RpcResponse {
    pub fn parse(body: &str) -> Result<Self, RpcClientError> {
        serde_json::from_str(body).map_err(|e| RpcClientError::Parse(e.to_string()))
    }

    /// Unwrap the envelope into its `result`, or the device error
    ///
    /// The `error` member is checked first; when present `result` is never read.
    pub fn into_result(self) -> Result<Value, RpcClientError> {
        if let Some(error) = self.error {
            return Err(fault_from(&error));
        }

        self.result.ok_or_else(|| {
            RpcClientError::Parse("Response contains neither result nor error".to_string())
        })
    }

    /// Check the response id against the id that was sent
    ///
    /// A response without an id is accepted.
    pub fn check_id(&self, expected: u32) -> Result<(), RpcClientError> {
        match &self.id {
            None | Some(Value::Null) => Ok(()),
            Some(id) if id.as_u64() == Some(u64::from(expected)) => Ok(()),
            Some(id) => Err(RpcClientError::IdMismatch {
                expected,
                actual: id.to_string(),
            }),
        }
    }
}

fn fault_from(error: &Value) -> RpcClientError {
    let message = error
        .get(1)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    match error.get(0).and_then(Value::as_i64) {
        Some(code) => RpcClientError::Fault { code, message },
        None => RpcClientError::Parse(format!("Malformed error member: {}", error)),
    }
}
