//! Sync client for Sony Bravia professional displays
//!
//! This crate wraps the display's IP control API, a JSON-RPC dialect served
//! over HTTP at `http://{host}/sony/{service}`. It uses the private
//! `rpc-client` crate for the wire format.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use bravia_api::{BraviaClient, Service};
//! use bravia_api::services::Volume;
//!
//! let client = BraviaClient::with_psk("192.168.1.25", "1234")?;
//!
//! let power = client.system().power_status()?;
//! println!("power: {}", power);
//!
//! client.audio().set_volume("speaker", Volume::Up(2))?;
//! client.av_content().set_play_content("extInput:hdmi?port=2")?;
//!
//! // What does this display support?
//! let api = client.api_info(Some(Service::AvContent))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Every call is one blocking request. Device errors come back as
//! [`ApiError::Rpc`] with the device's code and message; anything that
//! prevents a usable answer is [`ApiError::Transport`]. Nothing is retried.

#[macro_use]
mod macros;

pub mod client;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod logging;
pub mod models;
pub mod service;
pub mod services;

pub use client::BraviaClient;
pub use config::{ClientConfig, ConfigError, RequestId};
pub use dispatcher::Dispatcher;
pub use error::{ApiError, Result};
pub use service::Service;
pub use services::{Change, Setting};
