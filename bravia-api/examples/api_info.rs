//! Print what a display is and what it supports
//!
//! ```bash
//! BRAVIA_HOST=192.168.1.25 BRAVIA_PSK=1234 cargo run -p bravia-api --example api_info
//! ```
//!
//! Set `BRAVIA_LOG_MODE=debug` to see every request.

use bravia_api::logging::init_logging_from_env;
use bravia_api::{models, BraviaClient};
use serde_json::Value;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging_from_env()?;

    let client = BraviaClient::from_env()?;
    println!("Connecting to {}", client.config().base_url());

    let info: models::SystemInformation = models::first(&client.system().system_information()?)?;
    println!("{}", serde_json::to_string_pretty(&info)?);

    let interface: models::InterfaceInformation =
        models::first(&client.system().interface_information()?)?;
    println!("{}", serde_json::to_string_pretty(&interface)?);

    // [[{"service": "...", "protocols": [...], "apis": [...]}, ...]]
    let api = client.api_info(None)?;
    let services: Vec<&str> = api
        .get(0)
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.get("service").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default();
    println!("{}", serde_json::to_string_pretty(&services)?);

    Ok(())
}
