use serde_json::json;
use std::sync::Arc;

use crate::{Dispatcher, Service};

/// The `appControl` service: installed applications and text input
#[derive(Debug, Clone)]
pub struct AppControl {
    dispatcher: Arc<Dispatcher>,
}

impl AppControl {
    const SERVICE: Service = Service::AppControl;

    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    rpc_methods! {
        /// Applications available on the display, with title, uri and icon
        fn application_list() => "getApplicationList", "1.0", [];

        fn application_status_list() => "getApplicationStatusList", "1.0", [];

        /// Launch an application by the uri reported in the application list
        fn set_active_app(uri: &str) => "setActiveApp", "1.0", [json!({ "uri": uri })];

        /// Terminate every application that can be terminated
        fn terminate_apps() => "terminateApps", "1.0", [];

        /// Text of the focused software keyboard field
        fn text_form() => "getTextForm", "1.0", [];

        fn set_text_form(text: &str) => "setTextForm", "1.0", [json!({ "text": text })];

        fn web_app_status() => "getWebAppStatus", "1.0", [];
    }
}
