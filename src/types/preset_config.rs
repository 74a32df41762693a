// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Desired state for a preset, with every field optional.

use serde::{Deserialize, Serialize};

use crate::types::{Preset, Segment};

/// Desired state of one preset slot.
///
/// Unset fields resolve to firmware defaults in [`resolve`](Self::resolve),
/// the only place defaults are applied. Effect speed and intensity overrides
/// apply to the first segment.
///
/// # Examples
///
/// ```
/// use wled_lib::types::PresetConfig;
///
/// let preset = PresetConfig::new().with_name("Sunset").resolve();
/// assert_eq!(preset.name, "Sunset");
/// assert!(preset.on);
/// assert_eq!(preset.brightness, 255);
/// assert_eq!(preset.segments[0].effect_speed, 128);
///
/// let config: PresetConfig =
///     serde_json::from_str(r#"{"name": "Calm", "effect_speed": 40}"#).unwrap();
/// assert_eq!(config.resolve().segments[0].effect_speed, 40);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetConfig {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the light is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<bool>,

    /// Global brightness.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u8>,

    /// Crossfade duration in units of 100 ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<u16>,

    /// Id of the main segment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_segment: Option<u8>,

    /// Effect speed of the first segment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_speed: Option<u8>,

    /// Effect intensity of the first segment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_intensity: Option<u8>,

    /// Complete segment list; replaces the default segment when non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<Segment>>,
}

impl PresetConfig {
    /// Creates a config with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the on/off flag.
    #[must_use]
    pub fn with_on(mut self, on: bool) -> Self {
        self.on = Some(on);
        self
    }

    /// Sets the brightness.
    #[must_use]
    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Sets the transition, in units of 100 ms.
    #[must_use]
    pub fn with_transition(mut self, transition: u16) -> Self {
        self.transition = Some(transition);
        self
    }

    /// Sets the main segment id.
    #[must_use]
    pub fn with_main_segment(mut self, main_segment: u8) -> Self {
        self.main_segment = Some(main_segment);
        self
    }

    /// Sets the effect speed of the first segment.
    #[must_use]
    pub fn with_effect_speed(mut self, speed: u8) -> Self {
        self.effect_speed = Some(speed);
        self
    }

    /// Sets the effect intensity of the first segment.
    #[must_use]
    pub fn with_effect_intensity(mut self, intensity: u8) -> Self {
        self.effect_intensity = Some(intensity);
        self
    }

    /// Sets the complete segment list.
    #[must_use]
    pub fn with_segments(mut self, segments: Vec<Segment>) -> Self {
        self.segments = Some(segments);
        self
    }

    /// Produces the complete preset, filling unset fields with firmware
    /// defaults.
    #[must_use]
    pub fn resolve(&self) -> Preset {
        let mut preset = Preset::default();

        if let Some(name) = &self.name {
            preset.name.clone_from(name);
        }
        if let Some(on) = self.on {
            preset.on = on;
        }
        if let Some(brightness) = self.brightness {
            preset.brightness = brightness;
        }
        if let Some(transition) = self.transition {
            preset.transition = transition;
        }
        if let Some(main_segment) = self.main_segment {
            preset.main_segment = main_segment;
        }
        if let Some(segments) = self.segments.as_ref().filter(|s| !s.is_empty()) {
            preset.segments.clone_from(segments);
        }

        // Preset::default always carries one segment and non-empty lists
        // replace it, so the first segment exists here.
        if let Some(first) = preset.segments.first_mut() {
            if let Some(speed) = self.effect_speed {
                first.effect_speed = speed;
            }
            if let Some(intensity) = self.effect_intensity {
                first.effect_intensity = intensity;
            }
        }

        preset
    }
}

impl From<&PresetConfig> for Preset {
    fn from(config: &PresetConfig) -> Self {
        config.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_resolves_to_firmware_defaults() {
        assert_eq!(PresetConfig::new().resolve(), Preset::default());
    }

    #[test]
    fn name_only_fills_defaults() {
        let preset = PresetConfig::new().with_name("Sunset").resolve();
        assert_eq!(preset.name, "Sunset");
        assert!(preset.on);
        assert_eq!(preset.brightness, 255);
        assert_eq!(preset.transition, 0);
        assert_eq!(preset.main_segment, 0);
        assert_eq!(preset.segments.len(), 1);

        let segment = &preset.segments[0];
        assert_eq!(segment.id, Some(0));
        assert_eq!(segment.effect_speed, 128);
        assert_eq!(segment.effect_intensity, 255);
        assert_eq!(segment.brightness, 0);
        assert!(!segment.on);
        assert!(segment.colors.is_empty());
    }

    #[test]
    fn overrides_apply() {
        let preset = PresetConfig::new()
            .with_on(false)
            .with_brightness(40)
            .with_transition(9)
            .with_main_segment(1)
            .with_effect_speed(10)
            .with_effect_intensity(20)
            .resolve();
        assert!(!preset.on);
        assert_eq!(preset.brightness, 40);
        assert_eq!(preset.transition, 9);
        assert_eq!(preset.main_segment, 1);
        assert_eq!(preset.segments[0].effect_speed, 10);
        assert_eq!(preset.segments[0].effect_intensity, 20);
    }

    #[test]
    fn segments_replace_default_and_keep_order() {
        let preset = PresetConfig::new()
            .with_segments(vec![Segment::with_id(3), Segment::with_id(1)])
            .with_effect_speed(5)
            .resolve();
        let ids: Vec<Option<u8>> = preset.segments.iter().map(|s| s.id).collect();
        assert_eq!(ids, [Some(3), Some(1)]);
        assert_eq!(preset.segments[0].effect_speed, 5);
        assert_eq!(preset.segments[1].effect_speed, 128);
    }

    #[test]
    fn empty_segment_list_keeps_default_segment() {
        let preset = PresetConfig::new().with_segments(Vec::new()).resolve();
        assert_eq!(preset.segments, vec![Segment::default()]);
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        let result = serde_json::from_str::<PresetConfig>(r#"{"nmae": "typo"}"#);
        assert!(result.is_err());
    }
}
