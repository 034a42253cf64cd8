//! Private JSON-RPC client for Sony Bravia IP control
//!
//! This crate provides a minimal client for the vendor's JSON-RPC-over-HTTP
//! dialect. It builds the request envelope, POSTs it to a service endpoint,
//! and unwraps the `result` member or the device error.

mod envelope;
mod error;

pub use envelope::{RpcRequest, RpcResponse};
pub use error::RpcClientError;

use serde_json::Value;
use std::time::Duration;

/// Connect timeout used by [`RpcClient::new`]
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Read timeout used by [`RpcClient::new`]
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Header carrying the pre-shared key configured on the display
pub const PSK_HEADER: &str = "X-Auth-PSK";

/// A minimal JSON-RPC client for Bravia displays
#[derive(Debug, Clone)]
pub struct RpcClient {
    agent: ureq::Agent,
    verify_response_id: bool,
}

impl RpcClient {
    /// Create a new client with default timeouts
    pub fn new() -> Self {
        Self::with_timeouts(DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT)
    }

    /// Create a client with explicit connect and read timeouts
    pub fn with_timeouts(connect: Duration, read: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(connect)
                .timeout_read(read)
                .timeout_write(read)
                .build(),
            verify_response_id: true,
        }
    }

    /// Enable or disable the response id check (enabled by default)
    pub fn verify_response_id(mut self, verify: bool) -> Self {
        self.verify_response_id = verify;
        self
    }

    /// Send one request and return the `result` member of the response
    ///
    /// # Arguments
    /// * `url` - Full service URL, e.g. `http://192.168.1.25/sony/system`
    /// * `request` - The request envelope
    /// * `psk` - Pre-shared key, sent as `X-Auth-PSK` when present
    pub fn call(
        &self,
        url: &str,
        request: &RpcRequest,
        psk: Option<&str>,
    ) -> Result<Value, RpcClientError> {
        let body = request.to_body()?;
        tracing::trace!(url, %body, "sending rpc request");

        let mut http = self
            .agent
            .post(url)
            .set("Content-Type", "application/json");
        if let Some(psk) = psk {
            http = http.set(PSK_HEADER, psk);
        }

        let response = http.send_string(&body).map_err(network_error)?;

        let text = response
            .into_string()
            .map_err(|e| RpcClientError::Network(e.to_string()))?;
        tracing::trace!(url, body = %text, "received rpc response");

        let envelope = RpcResponse::parse(&text)?;
        self.extract_result(envelope, request.id)
    }

    // A device error is reported as-is even when its id does not match
    fn extract_result(&self, envelope: RpcResponse, id: u32) -> Result<Value, RpcClientError> {
        let id_check = if self.verify_response_id {
            envelope.check_id(id)
        } else {
            Ok(())
        };

        match envelope.into_result() {
            Err(fault @ RpcClientError::Fault { .. }) => {
                if let Err(mismatch) = id_check {
                    tracing::debug!(%mismatch, "device error carries an unexpected id");
                }
                Err(fault)
            }
            result => {
                id_check?;
                result
            }
        }
    }
}

impl Default for RpcClient {
    fn default() -> Self {
        Self::new()
    }
}

fn network_error(error: ureq::Error) -> RpcClientError {
    match error {
        ureq::Error::Status(code, _) => {
            RpcClientError::Network(format!("HTTP {} from device", code))
        }
        ureq::Error::Transport(transport) => RpcClientError::Network(transport.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_client_creation() {
        let _client = RpcClient::new();
        let _default_client = RpcClient::default();
        let _custom = RpcClient::with_timeouts(Duration::from_secs(1), Duration::from_secs(2));
    }

    #[test]
    fn test_extract_result_device_error_wins_over_id() {
        let client = RpcClient::new();
        let envelope =
            RpcResponse::parse(r#"{"error":[40005,"Display Is Turned Off"],"id":9}"#).unwrap();

        match client.extract_result(envelope, 1) {
            Err(RpcClientError::Fault { code, message }) => {
                assert_eq!(code, 40005);
                assert_eq!(message, "Display Is Turned Off");
            }
            other => panic!("Expected RpcClientError::Fault, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_result_checks_id_on_success() {
        let client = RpcClient::new();
        let envelope = RpcResponse::parse(r#"{"result":[],"id":9}"#).unwrap();

        assert!(matches!(
            client.extract_result(envelope, 1),
            Err(RpcClientError::IdMismatch { expected: 1, .. })
        ));
    }

    #[test]
    fn test_extract_result_without_id_check() {
        let client = RpcClient::new().verify_response_id(false);
        let envelope = RpcResponse::parse(r#"{"result":[{"status":"standby"}],"id":9}"#).unwrap();

        let result = client.extract_result(envelope, 1).unwrap();
        assert_eq!(result[0]["status"], "standby");
    }
}
