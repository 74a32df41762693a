// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ordered form fields for `application/x-www-form-urlencoded` bodies.

/// An ordered list of form fields.
///
/// # Examples
///
/// ```
/// use wled_lib::protocol::FormFields;
///
/// let mut fields = FormFields::new();
/// fields.push("DS", "Living room");
/// assert_eq!(fields.encode(), "DS=Living%20room");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    fields: Vec<(String, String)>,
}

impl FormFields {
    /// Creates an empty field list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.push((key.into(), value.into()));
    }

    /// Returns the first value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encodes the fields as a urlencoded body (`k1=v1&k2=v2`).
    #[must_use]
    pub fn encode(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_encode_to_empty_body() {
        let fields = FormFields::new();
        assert!(fields.is_empty());
        assert_eq!(fields.encode(), "");
    }

    #[test]
    fn fields_keep_insertion_order() {
        let mut fields = FormFields::new();
        fields.push("DS", "Kitchen");
        fields.push("ST", "1");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.encode(), "DS=Kitchen&ST=1");
        assert_eq!(fields.get("ST"), Some("1"));
        assert_eq!(fields.get("XX"), None);
    }

    #[test]
    fn values_are_escaped() {
        let mut fields = FormFields::new();
        fields.push("DS", "Bed & Breakfast=1");
        assert_eq!(fields.encode(), "DS=Bed%20%26%20Breakfast%3D1");
    }
}
