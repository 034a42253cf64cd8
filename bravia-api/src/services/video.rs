use serde_json::{json, Value};
use std::sync::Arc;

use super::Setting;
use crate::{Dispatcher, Result, Service};

/// The `video` service: picture quality
#[derive(Debug, Clone)]
pub struct Video {
    dispatcher: Arc<Dispatcher>,
}

impl Video {
    const SERVICE: Service = Service::Video;

    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Picture quality settings for one target, or all of them with `None`
    pub fn picture_quality_settings(&self, target: Option<&str>) -> Result<Value> {
        self.dispatcher.invoke(
            Self::SERVICE,
            "getPictureQualitySettings",
            vec![json!({ "target": target.unwrap_or_default() })],
            "1.0",
        )
    }

    pub fn set_picture_quality_settings(&self, settings: &[Setting]) -> Result<Value> {
        self.dispatcher.invoke(
            Self::SERVICE,
            "setPictureQualitySettings",
            vec![json!({ "settings": settings })],
            "1.0",
        )
    }
}
