use serde_json::Value;
use std::sync::Arc;

use crate::config::{ClientConfig, ConfigError};
use crate::services::{AppControl, AudioControl, AvContent, Guide, System, Video};
use crate::{Dispatcher, Result, Service};

/// A client bound to one Bravia display
///
/// The client owns a shared [`Dispatcher`]; every service group it hands out
/// holds a clone of the same handle. Cloning the client is cheap and clones
/// can be used from other threads.
///
/// # Example
/// ```rust,no_run
/// use bravia_api::BraviaClient;
///
/// let client = BraviaClient::with_psk("192.168.1.25", "1234")?;
/// let status = client.system().power_status()?;
/// client.audio().set_mute(true)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct BraviaClient {
    dispatcher: Arc<Dispatcher>,
}

impl BraviaClient {
    /// Create a client for `host` with default settings and no pre-shared key
    pub fn new(host: impl Into<String>) -> std::result::Result<Self, ConfigError> {
        Self::with_config(ClientConfig::new(host))
    }

    /// Create a client that authenticates with a pre-shared key
    pub fn with_psk(
        host: impl Into<String>,
        psk: impl Into<String>,
    ) -> std::result::Result<Self, ConfigError> {
        Self::with_config(ClientConfig::new(host).with_psk(psk))
    }

    /// Create a client from a full configuration
    ///
    /// The configuration is validated first, so nothing is ever sent with a
    /// reserved request id, a zero timeout or a malformed host.
    pub fn with_config(config: ClientConfig) -> std::result::Result<Self, ConfigError> {
        Ok(Self {
            dispatcher: Arc::new(Dispatcher::new(config)?),
        })
    }

    /// Create a client from `BRAVIA_*` environment variables
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        ClientConfig::from_env().and_then(Self::with_config)
    }

    pub fn config(&self) -> &ClientConfig {
        self.dispatcher.config()
    }

    /// The shared dispatcher, for calls this crate does not wrap
    pub fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.dispatcher
    }

    pub fn system(&self) -> System {
        System::new(Arc::clone(&self.dispatcher))
    }

    pub fn app_control(&self) -> AppControl {
        AppControl::new(Arc::clone(&self.dispatcher))
    }

    pub fn audio(&self) -> AudioControl {
        AudioControl::new(Arc::clone(&self.dispatcher))
    }

    pub fn av_content(&self) -> AvContent {
        AvContent::new(Arc::clone(&self.dispatcher))
    }

    pub fn video(&self) -> Video {
        Video::new(Arc::clone(&self.dispatcher))
    }

    pub fn guide(&self) -> Guide {
        Guide::new(Arc::clone(&self.dispatcher))
    }

    /// Describe the API of one service, or of all of them with `None`
    pub fn api_info(&self, service: Option<Service>) -> Result<Value> {
        self.guide().api_info(service)
    }

    /// Invoke any method on any service
    pub fn invoke(
        &self,
        service: Service,
        method: &str,
        params: Vec<Value>,
        version: &str,
    ) -> Result<Value> {
        self.dispatcher.invoke(service, method, params, version)
    }
}
