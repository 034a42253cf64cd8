//! Error types for the JSON-RPC client

use thiserror::Error;

/// Errors that can occur while talking to a Bravia display
#[derive(Debug, Error)]
pub enum RpcClientError {
    /// Network or HTTP communication error, including non-2xx status codes
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// The response body was not a valid envelope
    #[error("JSON parsing error: {0}")]
    Parse(String),

    /// Error reported by the device in the `error` field, verbatim
    #[error("Device error {code}: {message}")]
    Fault { code: i64, message: String },

    /// The response answered a different request
    #[error("Response id {actual} does not match request id {expected}")]
    IdMismatch { expected: u32, actual: String },
}
