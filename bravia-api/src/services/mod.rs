//! Service groups
//!
//! One type per vendor service. Each holds a shared handle to the
//! [`Dispatcher`](crate::Dispatcher) and exposes the vendor's methods with
//! their fixed names, versions and parameter shapes.

mod app_control;
mod audio;
mod av_content;
mod guide;
mod system;
mod video;

pub use app_control::AppControl;
pub use audio::{AudioControl, Volume};
pub use av_content::{AvContent, DEFAULT_PAGE_SIZE, HDMI_SOURCE};
pub use guide::Guide;
pub use system::{PowerSavingMode, System};
pub use video::Video;

use serde::Serialize;
use serde_json::Value;

/// One `{target, value}` pair in a settings list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Setting {
    pub target: String,
    pub value: String,
}

impl Setting {
    pub fn new(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            value: value.into(),
        }
    }
}

/// Outcome of a read-then-set call
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    /// The device already had the requested state; nothing was sent
    Unchanged,
    /// The set call was sent; holds its raw result
    Applied(Value),
}

impl Change {
    pub fn was_applied(&self) -> bool {
        matches!(self, Change::Applied(_))
    }
}
