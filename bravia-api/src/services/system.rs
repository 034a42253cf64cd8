use serde_json::{json, Value};
use std::sync::Arc;

use super::Change;
use crate::{models, Dispatcher, Result, Service};

/// Power saving levels accepted by `setPowerSavingMode`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerSavingMode {
    Off,
    Low,
    High,
    PictureOff,
}

impl PowerSavingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerSavingMode::Off => "off",
            PowerSavingMode::Low => "low",
            PowerSavingMode::High => "high",
            PowerSavingMode::PictureOff => "pictureOff",
        }
    }
}

/// The `system` service: power, network, LED, language and reboot
#[derive(Debug, Clone)]
pub struct System {
    dispatcher: Arc<Dispatcher>,
}

impl System {
    const SERVICE: Service = Service::System;

    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    rpc_methods! {
        /// Product, model, serial, MAC address and firmware generation
        fn system_information() => "getSystemInformation", "1.0", [];

        /// Network settings for one interface; an empty `netif` returns all of them
        fn network_settings(netif: &str) =>
            "getNetworkSettings", "1.0", [json!({ "netif": netif })];

        /// Information about the REST API served by the device
        fn interface_information() => "getInterfaceInformation", "1.0", [];

        /// `active` or `standby`
        fn power_status() => "getPowerStatus", "1.0", [];

        fn power_saving_mode() => "getPowerSavingMode", "1.0", [];

        fn led_indicator_status() => "getLEDIndicatorStatus", "1.0", [];

        fn supported_functions() => "getSystemSupportedFunction", "1.0", [];

        /// Whether Wake-on-LAN is enabled
        fn wol_mode() => "getWolMode", "1.0", [];

        fn current_time() => "getCurrentTime", "1.0", [];

        /// Remote controller IR codes
        fn remote_controller_info() => "getRemoteControllerInfo", "1.0", [];

        /// Turn the display on (`true`) or to standby (`false`)
        fn set_power_status(on: bool) => "setPowerStatus", "1.0", [json!({ "status": on })];

        /// Set the UI language; accepted values are region specific
        fn set_language(language: &str) => "setLanguage", "1.0", [json!({ "language": language })];

        fn set_wol_mode(enabled: bool) => "setWolMode", "1.0", [json!({ "enabled": enabled })];

        fn reboot() => "requestReboot", "1.0", [];
    }

    pub fn power_on(&self) -> Result<Value> {
        self.set_power_status(true)
    }

    pub fn power_off(&self) -> Result<Value> {
        self.set_power_status(false)
    }

    pub fn set_power_saving_mode(&self, mode: PowerSavingMode) -> Result<Value> {
        self.dispatcher.invoke(
            Self::SERVICE,
            "setPowerSavingMode",
            vec![json!({ "mode": mode.as_str() })],
            "1.0",
        )
    }

    /// Set the LED indicator mode, e.g. `Demo`, `AutoBrightnessAdjust`,
    /// `Dark`, `SimpleResponse` or `Off`
    ///
    /// The device expects the status as the strings `"true"`/`"false"`.
    pub fn set_led_indicator_status(&self, mode: &str, on: bool) -> Result<Value> {
        self.dispatcher.invoke(
            Self::SERVICE,
            "setLEDIndicatorStatus",
            vec![json!({ "mode": mode, "status": on.to_string() })],
            "1.1",
        )
    }

    /// Set the power state only if it differs from the current one
    pub fn ensure_power_status(&self, on: bool) -> Result<Change> {
        let current: models::PowerStatus = models::first(&self.power_status()?)?;
        if current.is_active() == on {
            tracing::debug!(on, "Power status already set");
            return Ok(Change::Unchanged);
        }
        self.set_power_status(on).map(Change::Applied)
    }

    /// Set Wake-on-LAN only if it differs from the current mode
    pub fn ensure_wol_mode(&self, enabled: bool) -> Result<Change> {
        let current: models::WolMode = models::first(&self.wol_mode()?)?;
        if current.enabled == enabled {
            tracing::debug!(enabled, "WoL mode already set");
            return Ok(Change::Unchanged);
        }
        self.set_wol_mode(enabled).map(Change::Applied)
    }
}
