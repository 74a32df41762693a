// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for WLED presets and settings.
//!
//! # Types
//!
//! - [`PresetId`] - Identifier of a preset slot
//! - [`Preset`] - One saved lighting configuration
//! - [`Segment`] - One addressable region of the strip within a preset
//! - [`Color`] - An RGB or RGBW tuple
//! - [`PresetCollection`] - The whole preset store of a device
//! - [`PresetConfig`] - Desired state for a preset with optional fields
//! - [`Settings`] - The global settings document of a device
//! - [`SettingsConfig`] - Desired state for the managed settings fields

mod color;
mod preset;
mod preset_collection;
mod preset_config;
mod preset_id;
mod segment;
mod settings;

pub use color::Color;
pub use preset::Preset;
pub use preset_collection::PresetCollection;
pub use preset_config::PresetConfig;
pub use preset_id::PresetId;
pub use segment::Segment;
pub use settings::{Settings, SettingsConfig, SettingsField};
