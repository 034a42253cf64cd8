//! Client configuration
//!
//! Everything a client needs to reach one display lives in [`ClientConfig`]:
//! where the device is, how to authenticate, how long to wait, and how to
//! stamp requests. The configuration is fixed once the client is built.

use rand::Rng;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Largest request id the device accepts
pub const MAX_REQUEST_ID: u32 = 2_147_483_647;

/// Protocol version used when a call does not name one
pub const DEFAULT_PROTOCOL_VERSION: &str = "1.0";

/// Environment variable holding the display host
pub const ENV_HOST: &str = "BRAVIA_HOST";
/// Environment variable holding the pre-shared key
pub const ENV_PSK: &str = "BRAVIA_PSK";
/// Environment variable holding an explicit port
pub const ENV_PORT: &str = "BRAVIA_PORT";
/// Environment variable holding the timeout in whole seconds
pub const ENV_TIMEOUT_SECS: &str = "BRAVIA_TIMEOUT_SECS";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Host must not be empty")]
    MissingHost,

    #[error("Invalid host '{0}': expected an address or hostname without scheme or path")]
    InvalidHost(String),

    #[error("{0} timeout must be greater than 0")]
    ZeroTimeout(&'static str),

    #[error("Invalid protocol version '{0}': expected <major>.<minor>")]
    InvalidVersion(String),

    #[error("Request id must be between 1 and 2147483647")]
    InvalidRequestId,

    #[error("Invalid value for {var}: {reason}")]
    InvalidEnv { var: &'static str, reason: String },
}

/// How request ids are chosen
///
/// The device reserves id 0 and never relies on ordering, so a constant id
/// is as good as a random one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestId {
    /// Every request carries the same id
    Fixed(u32),
    /// Every request draws an id uniformly from `1..=MAX_REQUEST_ID`
    Random,
}

impl RequestId {
    /// The id for the next request
    pub fn next(&self) -> u32 {
        match self {
            RequestId::Fixed(id) => *id,
            RequestId::Random => rand::thread_rng().gen_range(1..=MAX_REQUEST_ID),
        }
    }
}

impl Default for RequestId {
    fn default() -> Self {
        RequestId::Fixed(1)
    }
}

/// Configuration for a Bravia client
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// IP address or hostname of the display
    pub host: String,

    /// Pre-shared key configured on the display, sent as `X-Auth-PSK`
    /// Default: none
    pub psk: Option<String>,

    /// Explicit HTTP port
    /// Default: none (port 80)
    pub port: Option<u16>,

    /// Time allowed to establish the TCP connection
    /// Default: 5 seconds
    pub connect_timeout: Duration,

    /// Time allowed for the device to answer
    /// Default: 10 seconds
    pub read_timeout: Duration,

    /// Version used by calls that do not name one
    /// Default: "1.0"
    pub protocol_version: String,

    /// Request id strategy
    /// Default: `RequestId::Fixed(1)`
    pub request_id: RequestId,

    /// Reject responses whose `id` differs from the request's
    /// Default: true
    pub verify_response_id: bool,
}

impl ClientConfig {
    /// Create a configuration for the given host with default values
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            psk: None,
            port: None,
            connect_timeout: rpc_client::DEFAULT_CONNECT_TIMEOUT,
            read_timeout: rpc_client::DEFAULT_READ_TIMEOUT,
            protocol_version: DEFAULT_PROTOCOL_VERSION.to_string(),
            request_id: RequestId::default(),
            verify_response_id: true,
        }
    }

    /// Build a configuration from `BRAVIA_*` environment variables
    ///
    /// `BRAVIA_HOST` is required. `BRAVIA_PSK`, `BRAVIA_PORT` and
    /// `BRAVIA_TIMEOUT_SECS` are optional. The result is validated.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(ENV_HOST)
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .ok_or(ConfigError::MissingHost)?;

        let mut config = Self::new(host);

        if let Some(psk) = lookup(ENV_PSK).filter(|p| !p.is_empty()) {
            config = config.with_psk(psk);
        }

        if let Some(port) = lookup(ENV_PORT) {
            let port = port.trim().parse::<u16>().map_err(|e| ConfigError::InvalidEnv {
                var: ENV_PORT,
                reason: e.to_string(),
            })?;
            config = config.with_port(port);
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs = secs.trim().parse::<u64>().map_err(|e| ConfigError::InvalidEnv {
                var: ENV_TIMEOUT_SECS,
                reason: e.to_string(),
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration and return the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::MissingHost);
        }

        if self.host.contains("://")
            || self.host.contains('/')
            || self.host.chars().any(char::is_whitespace)
        {
            return Err(ConfigError::InvalidHost(self.host.clone()));
        }

        if self.connect_timeout == Duration::ZERO {
            return Err(ConfigError::ZeroTimeout("Connect"));
        }

        if self.read_timeout == Duration::ZERO {
            return Err(ConfigError::ZeroTimeout("Read"));
        }

        if !is_version(&self.protocol_version) {
            return Err(ConfigError::InvalidVersion(self.protocol_version.clone()));
        }

        if let RequestId::Fixed(id) = self.request_id {
            if id == 0 || id > MAX_REQUEST_ID {
                return Err(ConfigError::InvalidRequestId);
            }
        }

        Ok(())
    }

    /// Base URL all service endpoints hang off, e.g. `http://192.168.1.25/sony`
    pub fn base_url(&self) -> String {
        match self.port {
            Some(port) => format!("http://{}:{}/sony", self.host, port),
            None => format!("http://{}/sony", self.host),
        }
    }

    pub fn with_psk(mut self, psk: impl Into<String>) -> Self {
        self.psk = Some(psk.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set both the connect and read timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self.read_timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    pub fn with_protocol_version(mut self, version: impl Into<String>) -> Self {
        self.protocol_version = version.into();
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = request_id;
        self
    }

    pub fn with_response_id_check(mut self, verify: bool) -> Self {
        self.verify_response_id = verify;
        self
    }
}

// Keeps the pre-shared key out of logs and panic messages
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("psk", &self.psk.as_ref().map(|_| "<redacted>"))
            .field("port", &self.port)
            .field("connect_timeout", &self.connect_timeout)
            .field("read_timeout", &self.read_timeout)
            .field("protocol_version", &self.protocol_version)
            .field("request_id", &self.request_id)
            .field("verify_response_id", &self.verify_response_id)
            .finish()
    }
}

fn is_version(version: &str) -> bool {
    match version.split_once('.') {
        Some((major, minor)) => {
            !major.is_empty()
                && !minor.is_empty()
                && major.chars().all(|c| c.is_ascii_digit())
                && minor.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}
