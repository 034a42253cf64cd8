use serde_json::json;
use std::sync::Arc;

use crate::{Dispatcher, Service};

/// Source uri for the HDMI inputs
pub const HDMI_SOURCE: &str = "extInput:hdmi";

/// Page size the device accepts for `getContentList`
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// The `avContent` service: inputs, sources and playback
#[derive(Debug, Clone)]
pub struct AvContent {
    dispatcher: Arc<Dispatcher>,
}

impl AvContent {
    const SERVICE: Service = Service::AvContent;

    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    rpc_methods! {
        /// Number of contents under a source, e.g. [`HDMI_SOURCE`]
        fn content_count(source: &str) => "getContentCount", "1.1", [json!({ "source": source })];

        /// One page of contents under `uri`, starting at `start`
        fn content_list(uri: &str, start: u32, count: u32)
            => "getContentList", "1.5", [json!({ "stIdx": start, "cnt": count, "uri": uri })];

        /// Connection status and labels of the external inputs
        fn current_external_inputs_status() => "getCurrentExternalInputsStatus", "1.1", [];

        /// Sources under a scheme such as `extInput` or `tv`
        fn source_list(scheme: &str) => "getSourceList", "1.0", [json!({ "scheme": scheme })];

        fn scheme_list() => "getSchemeList", "1.0", [];

        fn playing_content_info() => "getPlayingContentInfo", "1.0", [];

        /// Switch to a content uri, e.g. `extInput:hdmi?port=2`
        fn set_play_content(uri: &str) => "setPlayContent", "1.0", [json!({ "uri": uri })];
    }
}
