// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Preset slot identifier.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Identifier of a preset slot on one device.
///
/// The firmware keys its preset store by the decimal slot number, but the
/// identifier is kept as an opaque string so keys round-trip exactly.
/// Identifiers are chosen by the caller; nothing in this crate allocates
/// them implicitly.
///
/// Numeric identifiers sort numerically (`2` before `10`), ahead of any
/// non-numeric ones.
///
/// # Examples
///
/// ```
/// use wled_lib::types::PresetId;
///
/// let id = PresetId::from(3);
/// assert_eq!(id.as_str(), "3");
/// assert_eq!(id.as_number(), Some(3));
///
/// let id: PresetId = "12".parse().unwrap();
/// assert_eq!(id.to_string(), "12");
///
/// assert!(PresetId::slot(251).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PresetId(String);

impl PresetId {
    /// Lowest slot the firmware accepts for user presets.
    pub const MIN_SLOT: u16 = 1;

    /// Highest slot the firmware accepts for user presets.
    pub const MAX_SLOT: u16 = 250;

    /// Creates an identifier from its string form.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::EmptyPresetId` if `id` is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValueError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValueError::EmptyPresetId);
        }
        Ok(Self(id))
    }

    /// Creates an identifier for a numbered user slot.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `slot` is outside 1-250.
    pub fn slot(slot: u16) -> Result<Self, ValueError> {
        if !(Self::MIN_SLOT..=Self::MAX_SLOT).contains(&slot) {
            return Err(ValueError::OutOfRange {
                min: Self::MIN_SLOT,
                max: Self::MAX_SLOT,
                actual: slot,
            });
        }
        Ok(Self::from(slot))
    }

    /// Returns the identifier as it appears on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the slot number if the identifier is numeric.
    #[must_use]
    pub fn as_number(&self) -> Option<u16> {
        self.0.parse().ok()
    }
}

impl From<u16> for PresetId {
    fn from(slot: u16) -> Self {
        Self(slot.to_string())
    }
}

impl TryFrom<String> for PresetId {
    type Error = ValueError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<PresetId> for String {
    fn from(id: PresetId) -> Self {
        id.0
    }
}

impl FromStr for PresetId {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Ord for PresetId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for PresetId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_id_is_rejected() {
        assert_eq!(PresetId::new(""), Err(ValueError::EmptyPresetId));
        assert!("".parse::<PresetId>().is_err());
    }

    #[test]
    fn slot_range() {
        assert!(PresetId::slot(0).is_err());
        assert_eq!(PresetId::slot(1).unwrap().as_str(), "1");
        assert_eq!(PresetId::slot(250).unwrap().as_str(), "250");
        assert_eq!(
            PresetId::slot(251),
            Err(ValueError::OutOfRange {
                min: 1,
                max: 250,
                actual: 251
            })
        );
    }

    #[test]
    fn non_numeric_ids_are_kept_verbatim() {
        let id = PresetId::new("sunset").unwrap();
        assert_eq!(id.as_str(), "sunset");
        assert_eq!(id.as_number(), None);
    }

    #[test]
    fn numeric_ordering() {
        let mut ids = vec![
            PresetId::from(10),
            PresetId::new("zz").unwrap(),
            PresetId::from(2),
            PresetId::from(1),
        ];
        ids.sort();
        let ids: Vec<&str> = ids.iter().map(PresetId::as_str).collect();
        assert_eq!(ids, ["1", "2", "10", "zz"]);
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&PresetId::from(7)).unwrap();
        assert_eq!(json, r#""7""#);
        let id: PresetId = serde_json::from_str(r#""7""#).unwrap();
        assert_eq!(id, PresetId::from(7));
    }

    #[test]
    fn empty_string_does_not_deserialize() {
        let err = serde_json::from_str::<PresetId>("\"\"").unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }
}
