// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB(W) color tuples as stored in segment color slots.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// One RGB or RGBW color.
///
/// On the wire a color is a JSON array of 3 or 4 bytes. Values read from a
/// device are kept as-is, so arrays of other lengths survive a round trip;
/// constructors only build valid tuples.
///
/// # Examples
///
/// ```
/// use wled_lib::types::Color;
///
/// let amber = Color::rgb(255, 160, 0);
/// assert_eq!(amber.channels(), &[255, 160, 0]);
/// assert_eq!(amber.white(), None);
///
/// let warm = Color::rgbw(255, 160, 0, 80);
/// assert_eq!(warm.white(), Some(80));
///
/// assert!(Color::from_channels(&[1, 2]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(Vec<u8>);

impl Color {
    /// Black, used by the firmware for unset color slots.
    #[must_use]
    pub fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    /// Creates an RGB color.
    #[must_use]
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(vec![red, green, blue])
    }

    /// Creates an RGBW color.
    #[must_use]
    pub fn rgbw(red: u8, green: u8, blue: u8, white: u8) -> Self {
        Self(vec![red, green, blue, white])
    }

    /// Creates a color from a channel slice.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidColor` unless the slice has 3 or 4 entries.
    pub fn from_channels(channels: &[u8]) -> Result<Self, ValueError> {
        match channels.len() {
            3 | 4 => Ok(Self(channels.to_vec())),
            n => Err(ValueError::InvalidColor(n)),
        }
    }

    /// Returns the raw channels.
    #[must_use]
    pub fn channels(&self) -> &[u8] {
        &self.0
    }

    /// Returns the red channel.
    #[must_use]
    pub fn red(&self) -> Option<u8> {
        self.0.first().copied()
    }

    /// Returns the green channel.
    #[must_use]
    pub fn green(&self) -> Option<u8> {
        self.0.get(1).copied()
    }

    /// Returns the blue channel.
    #[must_use]
    pub fn blue(&self) -> Option<u8> {
        self.0.get(2).copied()
    }

    /// Returns the white channel of an RGBW color.
    #[must_use]
    pub fn white(&self) -> Option<u8> {
        self.0.get(3).copied()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for channel in &self.0 {
            write!(f, "{channel:02X}")?;
        }
        Ok(())
    }
}
