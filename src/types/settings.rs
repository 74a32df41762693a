// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Global device settings.

use serde::{Deserialize, Serialize};

use crate::types::{Color, PresetId};

/// One child element of the settings document that this crate does not
/// manage, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsField {
    /// Element name, e.g. `ac`.
    pub tag: String,
    /// Element text.
    pub value: String,
}

/// The single global settings document of a device.
///
/// Only the UI description is written back. Every other element read from
/// the device is kept in document order so it can be inspected, with typed
/// accessors for the documented ones. Those elements are never sent on
/// write, so they cannot be corrupted by it.
///
/// # Examples
///
/// ```
/// use wled_lib::types::Settings;
///
/// let settings = Settings::new().with_description("Kitchen");
/// assert_eq!(settings.description(), Some("Kitchen"));
///
/// // Empty descriptions count as unset
/// assert_eq!(Settings::new().with_description("").description(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    description: Option<String>,
    fields: Vec<SettingsField>,
}

impl Settings {
    /// Creates settings with nothing set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(description: Option<String>, fields: Vec<SettingsField>) -> Self {
        Self {
            description,
            fields,
        }
    }

    /// Sets the UI description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the UI description, or `None` if it is unset or empty.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Returns every unmanaged element in document order.
    #[must_use]
    pub fn passthrough(&self) -> &[SettingsField] {
        &self.fields
    }

    /// Returns the text of the first element named `tag`.
    #[must_use]
    pub fn field(&self, tag: &str) -> Option<&str> {
        self.values(tag).next()
    }

    /// Iterates over the text of every element named `tag`.
    pub fn values<'a>(&'a self, tag: &str) -> impl Iterator<Item = &'a str> {
        self.fields
            .iter()
            .filter(move |field| field.tag == tag)
            .map(|field| field.value.as_str())
    }

    fn number<T: std::str::FromStr>(&self, tag: &str) -> Option<T> {
        self.field(tag).and_then(|v| v.trim().parse().ok())
    }

    fn color(&self, tag: &str) -> Option<Color> {
        let channels: Vec<u8> = self
            .values(tag)
            .map(|v| v.trim().parse().ok())
            .collect::<Option<_>>()?;
        Color::from_channels(&channels).ok()
    }

    /// Master brightness (`ac`).
    #[must_use]
    pub fn brightness(&self) -> Option<u8> {
        self.number("ac")
    }

    /// Primary color (`cl`).
    #[must_use]
    pub fn primary_color(&self) -> Option<Color> {
        self.color("cl")
    }

    /// Secondary color (`cs`).
    #[must_use]
    pub fn secondary_color(&self) -> Option<Color> {
        self.color("cs")
    }

    /// Current effect id (`fx`).
    #[must_use]
    pub fn effect(&self) -> Option<u8> {
        self.number("fx")
    }

    /// Current effect speed (`sx`).
    #[must_use]
    pub fn effect_speed(&self) -> Option<u8> {
        self.number("sx")
    }

    /// Current effect intensity (`ix`).
    #[must_use]
    pub fn effect_intensity(&self) -> Option<u8> {
        self.number("ix")
    }

    /// Current palette id (`fp`).
    #[must_use]
    pub fn palette(&self) -> Option<u8> {
        self.number("fp")
    }

    /// Currently applied preset (`ps`); `None` when no preset is active.
    #[must_use]
    pub fn current_preset(&self) -> Option<PresetId> {
        self.number::<u16>("ps")
            .filter(|&slot| slot != 0)
            .map(PresetId::from)
    }

    /// Whether the nightlight is running (`nl`).
    #[must_use]
    pub fn nightlight_active(&self) -> Option<bool> {
        self.number::<u8>("nl").map(|v| v != 0)
    }
}

/// Desired state of the managed settings fields.
///
/// # Examples
///
/// ```
/// use wled_lib::types::{Settings, SettingsConfig};
///
/// let config: SettingsConfig = serde_json::from_str(r#"{"description": "Porch"}"#).unwrap();
/// let settings = Settings::from(config);
/// assert_eq!(settings.description(), Some("Porch"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsConfig {
    /// UI description shown by the device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<SettingsConfig> for Settings {
    fn from(config: SettingsConfig) -> Self {
        Self {
            description: config.description,
            fields: Vec::new(),
        }
    }
}
