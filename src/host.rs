// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! One-shot operations addressed by host name.
//!
//! Each function builds a fresh HTTP device for `host`, runs one operation
//! and drops it. `host` is a bare hostname or IP address; the device is
//! always reached over plain HTTP on the default port.
//!
//! ```no_run
//! use wled_lib::host;
//! use wled_lib::types::{Preset, PresetId, Settings};
//!
//! # async fn example() -> wled_lib::Result<()> {
//! host::set_preset("wled.local", &PresetId::from(1), Preset::named("Reading")).await?;
//! host::set_settings("wled.local", &Settings::new().with_description("Study")).await?;
//! # Ok(())
//! # }
//! ```

use crate::device::Device;
use crate::error::Result;
use crate::types::{Preset, PresetId, Settings};

/// Reads one preset from `host`; `Ok(None)` if the slot is empty.
///
/// # Errors
///
/// Returns error if the preset store cannot be read.
pub async fn get_preset(host: &str, id: &PresetId) -> Result<Option<Preset>> {
    Device::http(host).build()?.get_preset(id).await
}

/// Stores `preset` under `id` on `host`, keeping every other preset.
///
/// # Errors
///
/// Returns error if the preset store cannot be read, encoded or uploaded.
pub async fn set_preset(host: &str, id: &PresetId, preset: Preset) -> Result<()> {
    Device::http(host).build()?.set_preset(id, preset).await
}

/// Reads the settings of `host`.
///
/// # Errors
///
/// Returns error if the settings document cannot be read.
pub async fn get_settings(host: &str) -> Result<Settings> {
    Device::http(host).build()?.get_settings().await
}

/// Writes the managed settings fields of `host`.
///
/// # Errors
///
/// Returns error if the form cannot be posted.
pub async fn set_settings(host: &str, settings: &Settings) -> Result<()> {
    Device::http(host).build()?.set_settings(settings).await
}
