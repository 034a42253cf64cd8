/// The services exposed by a Bravia display
///
/// Each service is a vendor-defined group of methods served at its own path
/// below `/sony/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Reflective API description (getSupportedApiInfo and friends)
    Guide,

    /// Power, network, LED and other device-level settings
    System,

    /// Application list, launching and text input
    AppControl,

    /// Volume, mute, sound and speaker settings
    Audio,

    /// Inputs, sources and content playback
    AvContent,

    /// Picture quality settings
    Video,

    /// Screen layout and scene settings
    VideoScreen,

    /// Public key exchange for encrypted calls
    Encryption,
}

impl Service {
    /// Every service the guide can describe, in the order the device lists them
    pub const DESCRIBABLE: [Service; 7] = [
        Service::AppControl,
        Service::Audio,
        Service::AvContent,
        Service::Encryption,
        Service::System,
        Service::Video,
        Service::VideoScreen,
    ];

    /// The endpoint path segment for this service
    pub fn endpoint(&self) -> &'static str {
        match self {
            Service::Guide => "guide",
            Service::System => "system",
            Service::AppControl => "appControl",
            Service::Audio => "audio",
            Service::AvContent => "avContent",
            Service::Video => "video",
            Service::VideoScreen => "videoScreen",
            Service::Encryption => "encryption",
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.endpoint())
    }
}
