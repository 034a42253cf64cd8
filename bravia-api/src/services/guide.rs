use serde_json::{json, Value};
use std::sync::Arc;

use crate::{Dispatcher, Result, Service};

/// The `guide` service and the reflective calls every service answers
///
/// These calls describe the API; they do not control the display.
#[derive(Debug, Clone)]
pub struct Guide {
    dispatcher: Arc<Dispatcher>,
}

impl Guide {
    const SERVICE: Service = Service::Guide;

    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    rpc_methods! {
        fn service_protocols() => "getServiceProtocols", "1.0", [];
    }

    /// Supported methods and versions for one service, or for every service
    /// in [`Service::DESCRIBABLE`] when `service` is `None`
    pub fn api_info(&self, service: Option<Service>) -> Result<Value> {
        let services: Vec<&str> = match service {
            Some(service) => vec![service.endpoint()],
            None => Service::DESCRIBABLE.iter().map(Service::endpoint).collect(),
        };

        self.dispatcher.invoke(
            Self::SERVICE,
            "getSupportedApiInfo",
            vec![json!({ "services": services })],
            "1.0",
        )
    }

    /// Method signatures as reported by the service itself
    pub fn method_types(&self, service: Service) -> Result<Value> {
        self.dispatcher
            .invoke(service, "getMethodTypes", vec![json!("")], "1.0")
    }
}
