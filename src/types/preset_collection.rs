// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The whole preset store of a device.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::types::{Preset, PresetId};

/// Every preset stored on one device, keyed by [`PresetId`].
///
/// The firmware only supports replacing the preset file as a whole, so any
/// change to one entry means writing this entire collection back. Entries
/// that are read from the device and never replaced are written back exactly
/// as they were read, including fields this crate does not model and fields
/// that were absent.
///
/// # Examples
///
/// ```
/// use wled_lib::types::{Preset, PresetCollection, PresetId};
///
/// let mut presets = PresetCollection::new();
/// assert!(presets.is_empty());
///
/// presets.insert(PresetId::from(1), Preset::named("Morning"));
/// presets.insert(PresetId::from(2), Preset::named("Evening"));
/// assert_eq!(presets.len(), 2);
/// assert_eq!(presets.get(&PresetId::from(2)).unwrap().name, "Evening");
/// assert_eq!(presets.next_free_id(), Some(PresetId::from(3)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PresetCollection {
    entries: BTreeMap<PresetId, Entry>,
}

#[derive(Debug, Clone)]
struct Entry {
    preset: Preset,
    // Document as read from the device; cleared once the entry is replaced.
    original: Option<Value>,
}

impl PresetCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the preset stored under `id`.
    #[must_use]
    pub fn get(&self, id: &PresetId) -> Option<&Preset> {
        self.entries.get(id).map(|entry| &entry.preset)
    }

    /// Returns `true` if a preset is stored under `id`.
    #[must_use]
    pub fn contains(&self, id: &PresetId) -> bool {
        self.entries.contains_key(id)
    }

    /// Inserts or replaces the preset stored under `id`.
    ///
    /// The full preset value is replaced; there is no field-level merge.
    /// Returns the previous preset, if any.
    pub fn insert(&mut self, id: PresetId, preset: Preset) -> Option<Preset> {
        self.entries
            .insert(
                id,
                Entry {
                    preset,
                    original: None,
                },
            )
            .map(|entry| entry.preset)
    }

    /// Removes the preset stored under `id`.
    pub fn remove(&mut self, id: &PresetId) -> Option<Preset> {
        self.entries.remove(id).map(|entry| entry.preset)
    }

    /// Returns the number of stored presets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no preset is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the presets in id order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterates over the stored ids in order.
    pub fn ids(&self) -> impl Iterator<Item = &PresetId> {
        self.entries.keys()
    }

    /// Returns the lowest user slot (1-250) that holds no preset.
    #[must_use]
    pub fn next_free_id(&self) -> Option<PresetId> {
        (PresetId::MIN_SLOT..=PresetId::MAX_SLOT)
            .map(PresetId::from)
            .find(|id| !self.entries.contains_key(id))
    }
}

/// Iterator over the presets of a [`PresetCollection`].
#[derive(Debug)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, PresetId, Entry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a PresetId, &'a Preset);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(id, entry)| (id, &entry.preset))
    }
}

impl<'a> IntoIterator for &'a PresetCollection {
    type Item = (&'a PresetId, &'a Preset);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(PresetId, Preset)> for PresetCollection {
    fn from_iter<I: IntoIterator<Item = (PresetId, Preset)>>(iter: I) -> Self {
        let mut collection = Self::new();
        for (id, preset) in iter {
            collection.insert(id, preset);
        }
        collection
    }
}

impl PartialEq for PresetCollection {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(left, right)| left == right)
    }
}

impl Serialize for PresetCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, entry) in &self.entries {
            match &entry.original {
                Some(original) => map.serialize_entry(id, original)?,
                None => map.serialize_entry(id, &entry.preset)?,
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PresetCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<PresetId, Value>::deserialize(deserializer)?;
        let mut entries = BTreeMap::new();
        for (id, original) in raw {
            let preset = Preset::deserialize(&original)
                .map_err(|err| D::Error::custom(format!("preset {id}: {err}")))?;
            entries.insert(
                id,
                Entry {
                    preset,
                    original: Some(original),
                },
            );
        }
        Ok(Self { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u16) -> PresetId {
        PresetId::from(n)
    }

    #[test]
    fn insert_replaces_whole_preset() {
        let mut presets = PresetCollection::new();
        assert!(presets.insert(id(1), Preset::named("A")).is_none());

        let previous = presets.insert(id(1), Preset::named("B")).unwrap();
        assert_eq!(previous.name, "A");
        assert_eq!(presets.get(&id(1)).unwrap().name, "B");
        assert_eq!(presets.len(), 1);
    }

    #[test]
    fn remove_entry() {
        let mut presets: PresetCollection = [(id(1), Preset::named("A"))].into_iter().collect();
        assert!(presets.contains(&id(1)));
        assert_eq!(presets.remove(&id(1)).unwrap().name, "A");
        assert!(presets.remove(&id(1)).is_none());
        assert!(presets.is_empty());
    }

    #[test]
    fn next_free_id_skips_used_slots() {
        let presets: PresetCollection = [(id(1), Preset::default()), (id(2), Preset::default())]
            .into_iter()
            .collect();
        assert_eq!(presets.next_free_id(), Some(id(3)));

        let full: PresetCollection = (1..=250).map(|n| (id(n), Preset::default())).collect();
        assert_eq!(full.next_free_id(), None);
    }

    #[test]
    fn untouched_entries_are_written_back_verbatim() {
        let json = r#"{"0":{},"1":{"n":"Loop","playlist":{"ps":[2,3]}}}"#;
        let presets: PresetCollection = serde_json::from_str(json).unwrap();
        assert_eq!(presets.len(), 2);

        let encoded = serde_json::to_value(&presets).unwrap();
        assert_eq!(encoded, serde_json::from_str::<Value>(json).unwrap());
    }

    #[test]
    fn replaced_entries_are_written_in_full() {
        let json = r#"{"1":{"n":"Old"},"2":{"n":"Other"}}"#;
        let mut presets: PresetCollection = serde_json::from_str(json).unwrap();
        presets.insert(id(1), Preset::named("New"));

        let encoded = serde_json::to_value(&presets).unwrap();
        assert_eq!(encoded["1"]["n"], "New");
        assert_eq!(encoded["1"]["bri"], 255);
        assert_eq!(encoded["2"], serde_json::json!({"n": "Other"}));
    }

    #[test]
    fn invalid_entry_fails_whole_collection() {
        let json = r#"{"1":{"n":"Ok"},"2":{"bri":"bright"}}"#;
        let err = serde_json::from_str::<PresetCollection>(json).unwrap_err();
        assert!(err.to_string().contains("preset 2"));
    }

    #[test]
    fn iteration_is_in_numeric_order() {
        let presets: PresetCollection = [
            (id(10), Preset::named("ten")),
            (id(2), Preset::named("two")),
        ]
        .into_iter()
        .collect();
        let names: Vec<&str> = presets.iter().map(|(_, p)| p.name.as_str()).collect();
        assert_eq!(names, ["two", "ten"]);
    }
}
