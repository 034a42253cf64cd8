use rpc_client::{RpcClient, RpcRequest};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{ClientConfig, ConfigError, Result, Service};

/// Sends one JSON-RPC call per invocation to a single display
///
/// The dispatcher owns the configuration and the HTTP client. Service groups
/// hold it behind an `Arc` and add nothing but method names and parameter
/// shapes. It keeps no per-call state, so it can be shared across threads.
#[derive(Debug)]
pub struct Dispatcher {
    rpc: RpcClient,
    config: ClientConfig,
}

impl Dispatcher {
    /// Create a dispatcher for the configured display
    ///
    /// Fails with the first problem [`ClientConfig::validate`] reports.
    pub fn new(config: ClientConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;

        let rpc = RpcClient::with_timeouts(config.connect_timeout, config.read_timeout)
            .verify_response_id(config.verify_response_id);
        Ok(Self { rpc, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The URL a service's requests are posted to
    pub fn endpoint_url(&self, service: Service) -> String {
        self.url_for(service.endpoint())
    }

    /// Invoke `method` on `service` and return the raw `result` member
    ///
    /// # Arguments
    /// * `service` - The service whose endpoint receives the request
    /// * `method` - Vendor method name, e.g. `getPowerStatus`
    /// * `params` - The `params` list, usually empty or a single object
    /// * `version` - Method version, e.g. `"1.0"`
    ///
    /// # Example
    /// ```rust,no_run
    /// use bravia_api::{ClientConfig, Dispatcher, Service};
    ///
    /// let dispatcher = Dispatcher::new(ClientConfig::new("192.168.1.25"))?;
    /// let status = dispatcher.invoke(Service::System, "getPowerStatus", vec![], "1.0")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn invoke(
        &self,
        service: Service,
        method: &str,
        params: Vec<Value>,
        version: &str,
    ) -> Result<Value> {
        self.invoke_path(service.endpoint(), method, params, version)
    }

    /// Invoke a method with the configured default protocol version
    pub fn invoke_default(
        &self,
        service: Service,
        method: &str,
        params: Vec<Value>,
    ) -> Result<Value> {
        self.invoke_path(service.endpoint(), method, params, &self.config.protocol_version)
    }

    /// Invoke a method on an arbitrary endpoint path below `/sony/`
    ///
    /// Useful for vendor services and methods this crate does not wrap.
    pub fn invoke_path(
        &self,
        endpoint: &str,
        method: &str,
        params: Vec<Value>,
        version: &str,
    ) -> Result<Value> {
        let id = self.config.request_id.next();
        let request = RpcRequest::new(method, params, id, version);
        let url = self.url_for(endpoint);

        debug!(endpoint, method, id, version, "Invoking Bravia method");

        match self.rpc.call(&url, &request, self.config.psk.as_deref()) {
            Ok(result) => {
                debug!(endpoint, method, id, "Bravia method succeeded");
                Ok(result)
            }
            Err(e) => {
                warn!(endpoint, method, id, error = %e, "Bravia method failed");
                Err(e.into())
            }
        }
    }

    fn url_for(&self, endpoint: &str) -> String {
        format!("{}/{}", self.config.base_url(), endpoint)
    }
}
