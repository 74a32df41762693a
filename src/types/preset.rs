// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A saved preset.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::Segment;

/// One saved lighting configuration.
///
/// [`Preset::default`] matches what the firmware uses for a fresh slot:
/// lit, full brightness, no transition, and a single default segment.
/// Fields missing from a device document decode to their zero value instead;
/// unknown fields (playlists, newer firmware keys) are kept in
/// [`extra`](Self::extra) and written back unchanged.
///
/// Identity is by [`PresetId`](crate::types::PresetId) only; names need not
/// be unique.
///
/// # Examples
///
/// ```
/// use wled_lib::types::Preset;
///
/// let preset = Preset::named("Sunset");
/// assert!(preset.on);
/// assert_eq!(preset.brightness, 255);
/// assert_eq!(preset.segments.len(), 1);
///
/// let json = serde_json::to_value(&preset).unwrap();
/// assert_eq!(json["n"], "Sunset");
/// assert_eq!(json["seg"][0]["sx"], 128);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Display name.
    #[serde(rename = "n", default)]
    pub name: String,

    /// Whether the light is on.
    #[serde(default)]
    pub on: bool,

    /// Global brightness.
    #[serde(rename = "bri", default)]
    pub brightness: u8,

    /// Crossfade duration in units of 100 ms.
    #[serde(default)]
    pub transition: u16,

    /// Id of the main segment.
    #[serde(rename = "mainseg", default)]
    pub main_segment: u8,

    /// Segment configurations, in device order.
    #[serde(rename = "seg", default)]
    pub segments: Vec<Segment>,

    /// Fields this crate does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Preset {
    /// Firmware default brightness.
    pub const DEFAULT_BRIGHTNESS: u8 = 255;

    /// Duration of one transition unit.
    pub const TRANSITION_UNIT: Duration = Duration::from_millis(100);

    /// Creates a default preset with the given name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the crossfade duration.
    #[must_use]
    pub fn transition_duration(&self) -> Duration {
        Self::TRANSITION_UNIT * u32::from(self.transition)
    }

    /// Returns the main segment, if it is present.
    ///
    /// A segment without an id is matched by its position in the list.
    #[must_use]
    pub fn find_main_segment(&self) -> Option<&Segment> {
        self.segments
            .iter()
            .enumerate()
            .find(|(index, segment)| match segment.id {
                Some(id) => id == self.main_segment,
                None => *index == usize::from(self.main_segment),
            })
            .map(|(_, segment)| segment)
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self {
            name: String::new(),
            on: true,
            brightness: Self::DEFAULT_BRIGHTNESS,
            transition: 0,
            main_segment: 0,
            segments: vec![Segment::default()],
            extra: Map::new(),
        }
    }
}
