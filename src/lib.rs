// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `wled_lib` - A Rust library to read and persist WLED presets and settings.
//!
//! This library provides async APIs to synchronize stored configuration with
//! WLED-powered LED controllers over their HTTP interface.
//!
//! # Supported Features
//!
//! - **Presets**: read the preset store, read one preset, create or replace
//!   one preset without disturbing the others, batch several changes into one
//!   upload, delete a preset
//! - **Settings**: read the settings document, write the device description
//! - **Defaults**: build presets from partial configuration with firmware
//!   default values filled in
//!
//! # Quick Start
//!
//! ## Presets
//!
//! ```no_run
//! use wled_lib::Device;
//! use wled_lib::types::{Preset, PresetId};
//!
//! #[tokio::main]
//! async fn main() -> wled_lib::Result<()> {
//!     let device = Device::http("192.168.1.40").build()?;
//!
//!     // Every other preset on the device is kept
//!     let id = PresetId::slot(1)?;
//!     device.set_preset(&id, Preset::named("Reading")).await?;
//!
//!     if let Some(preset) = device.get_preset(&id).await? {
//!         println!("{} at brightness {}", preset.name, preset.brightness);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Settings
//!
//! ```no_run
//! use wled_lib::Device;
//! use wled_lib::types::Settings;
//!
//! #[tokio::main]
//! async fn main() -> wled_lib::Result<()> {
//!     let (device, settings) = Device::http("192.168.1.40").connect().await?;
//!     println!("current description: {:?}", settings.description());
//!
//!     device
//!         .set_settings(&Settings::new().with_description("Kitchen"))
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## One-shot calls by host
//!
//! ```no_run
//! use wled_lib::host;
//!
//! #[tokio::main]
//! async fn main() -> wled_lib::Result<()> {
//!     let settings = host::get_settings("wled-kitchen.local").await?;
//!     println!("{:?}", settings.description());
//!     Ok(())
//! }
//! ```

pub mod codec;
mod device;
pub mod error;
pub mod host;
pub mod protocol;
pub mod types;

pub use device::{Device, HttpDeviceBuilder};
pub use error::{EncodeError, Error, NetworkError, ParseError, Result, ValueError};
pub use protocol::{HttpClient, HttpConfig, Transport};
pub use types::{Preset, PresetCollection, PresetConfig, PresetId, Segment, Settings};
