use rpc_client::RpcClientError;
use thiserror::Error;

/// Errors returned by Bravia API calls
///
/// Every dispatch either reaches the device and gets an answer, or it does
/// not. Device answers carrying an `error` member become [`ApiError::Rpc`];
/// everything else that goes wrong on the way becomes [`ApiError::Transport`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network, HTTP or envelope failure
    ///
    /// Covers refused connections, timeouts, non-2xx status codes, bodies
    /// that are not valid JSON, responses without `result`, mismatched
    /// response ids, and results whose shape does not match a typed model.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Error reported by the display
    ///
    /// The code and message are the device's own and are passed through
    /// unchanged.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },
}

impl ApiError {
    /// The device error code, if the device answered with one
    pub fn code(&self) -> Option<i64> {
        match self {
            ApiError::Rpc { code, .. } => Some(*code),
            ApiError::Transport(_) => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<RpcClientError> for ApiError {
    fn from(error: RpcClientError) -> Self {
        match error {
            RpcClientError::Fault { code, message } => ApiError::Rpc { code, message },
            RpcClientError::Network(msg) => ApiError::Transport(msg),
            RpcClientError::Parse(msg) => ApiError::Transport(format!("Invalid response: {}", msg)),
            mismatch @ RpcClientError::IdMismatch { .. } => {
                ApiError::Transport(mismatch.to_string())
            }
        }
    }
}
