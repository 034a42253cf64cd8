use serde_json::{json, Value};
use std::sync::Arc;

use super::Setting;
use crate::{Dispatcher, Result, Service};

/// A volume level for `setAudioVolume`
///
/// The device takes the level as a string; a leading sign makes it relative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Volume {
    Absolute(u32),
    Up(u32),
    Down(u32),
}

impl Volume {
    fn wire(&self) -> String {
        match self {
            Volume::Absolute(level) => level.to_string(),
            Volume::Up(step) => format!("+{}", step),
            Volume::Down(step) => format!("-{}", step),
        }
    }
}

/// The `audio` service: volume, mute, sound and speaker settings
#[derive(Debug, Clone)]
pub struct AudioControl {
    dispatcher: Arc<Dispatcher>,
}

impl AudioControl {
    const SERVICE: Service = Service::Audio;

    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    rpc_methods! {
        /// Sound settings for a target, usually `outputTerminal`
        fn sound_settings(target: &str) => "getSoundSettings", "1.1", [json!({ "target": target })];

        /// Speaker settings for a target, usually `tvPosition`
        fn speaker_settings(target: &str) =>
            "getSpeakerSettings", "1.0", [json!({ "target": target })];

        /// Volume and mute state of every output
        fn volume_information() => "getVolumeInformation", "1.0", [];

        fn set_mute(muted: bool) => "setAudioMute", "1.0", [json!({ "status": muted })];
    }

    /// Set the volume of `target` (`speaker` or `headphone`)
    pub fn set_volume(&self, target: &str, volume: Volume) -> Result<Value> {
        self.dispatcher.invoke(
            Self::SERVICE,
            "setAudioVolume",
            vec![json!({ "target": target, "volume": volume.wire() })],
            "1.0",
        )
    }

    pub fn set_sound_settings(&self, settings: &[Setting]) -> Result<Value> {
        self.dispatcher.invoke(
            Self::SERVICE,
            "setSoundSettings",
            vec![json!({ "settings": settings })],
            "1.1",
        )
    }

    pub fn set_speaker_settings(&self, settings: &[Setting]) -> Result<Value> {
        self.dispatcher.invoke(
            Self::SERVICE,
            "setSpeakerSettings",
            vec![json!({ "settings": settings })],
            "1.0",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_wire_format() {
        assert_eq!(Volume::Absolute(18).wire(), "18");
        assert_eq!(Volume::Up(2).wire(), "+2");
        assert_eq!(Volume::Down(5).wire(), "-5");
    }
}
