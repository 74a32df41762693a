// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Segment configuration stored inside a preset.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValueError;
use crate::types::Color;

/// One addressable region of the LED strip within a preset.
///
/// Field names follow the firmware JSON API (`grp`, `spc`, `sx`, ...).
/// Fields missing from a device document decode to their zero value.
/// Unknown fields written by newer firmware are kept in [`extra`](Self::extra)
/// and written back unchanged.
///
/// If a segment id is omitted the firmware infers it from the position in
/// the `seg` array, so segment order is always preserved.
///
/// # Examples
///
/// ```
/// use wled_lib::types::{Color, Segment};
///
/// let segment = Segment::default()
///     .with_colors(vec![Color::rgb(255, 160, 0)])
///     .unwrap();
/// assert_eq!(segment.effect_speed, 128);
/// assert_eq!(segment.effect_intensity, 255);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Zero-indexed segment id; `None` leaves it to the segment's position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u8>,

    /// How many consecutive LEDs share one color.
    #[serde(rename = "grp", default)]
    pub grouping: u8,

    /// How many LEDs are skipped between groups.
    #[serde(rename = "spc", default)]
    pub spacing: u8,

    /// Rotation of the virtual start of the segment.
    #[serde(rename = "of", default)]
    pub offset: u16,

    /// Whether the segment is lit.
    #[serde(default)]
    pub on: bool,

    /// Whether the segment contents are frozen.
    #[serde(rename = "frz", default)]
    pub freeze: bool,

    /// Segment brightness.
    #[serde(rename = "bri", default)]
    pub brightness: u8,

    /// White spectrum color temperature.
    #[serde(rename = "cct", default)]
    pub color_temperature: u16,

    /// Primary, secondary and tertiary colors.
    #[serde(rename = "col", default)]
    pub colors: Vec<Color>,

    /// Effect id.
    #[serde(rename = "fx", default)]
    pub effect: u8,

    /// Relative effect speed.
    #[serde(rename = "sx", default)]
    pub effect_speed: u8,

    /// Effect intensity.
    #[serde(rename = "ix", default)]
    pub effect_intensity: u8,

    /// Color palette id.
    #[serde(rename = "pal", default)]
    pub palette: u8,

    /// Whether the segment is selected.
    #[serde(rename = "sel", default)]
    pub selected: bool,

    /// Whether animations run in reverse.
    #[serde(rename = "rev", default)]
    pub reversed: bool,

    /// Whether the segment is mirrored.
    #[serde(rename = "mi", default)]
    pub mirrored: bool,

    /// Fields this crate does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Segment {
    /// Maximum number of color slots in a segment.
    pub const MAX_COLORS: usize = 3;

    /// Firmware default effect speed.
    pub const DEFAULT_EFFECT_SPEED: u8 = 128;

    /// Firmware default effect intensity.
    pub const DEFAULT_EFFECT_INTENSITY: u8 = 255;

    /// Creates a default segment with the given id.
    #[must_use]
    pub fn with_id(id: u8) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Replaces the color slots.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if more than three colors are given.
    pub fn with_colors(mut self, colors: Vec<Color>) -> Result<Self, ValueError> {
        if colors.len() > Self::MAX_COLORS {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 3,
                actual: u16::try_from(colors.len()).unwrap_or(u16::MAX),
            });
        }
        self.colors = colors;
        Ok(self)
    }
}

impl Default for Segment {
    fn default() -> Self {
        Self {
            id: Some(0),
            grouping: 0,
            spacing: 0,
            offset: 0,
            on: false,
            freeze: false,
            brightness: 0,
            color_temperature: 0,
            colors: Vec::new(),
            effect: 0,
            effect_speed: Self::DEFAULT_EFFECT_SPEED,
            effect_intensity: Self::DEFAULT_EFFECT_INTENSITY,
            palette: 0,
            selected: false,
            reversed: false,
            mirrored: false,
            extra: Map::new(),
        }
    }
}
