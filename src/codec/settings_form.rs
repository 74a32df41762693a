// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Form codec for writing the managed settings fields.

use crate::protocol::FormFields;
use crate::types::Settings;

/// Path the settings form is posted to.
pub const PATH: &str = "/settings/ui?";

/// Form key of the UI description.
pub const DESCRIPTION_FIELD: &str = "DS";

/// Builds the form for the fields this crate manages.
///
/// Unset or empty values are left out so the device keeps what it already
/// stores for them. Passthrough fields read from the XML document are never
/// included.
#[must_use]
pub fn encode(settings: &Settings) -> FormFields {
    let mut fields = FormFields::new();
    if let Some(description) = settings.description() {
        fields.push(DESCRIPTION_FIELD, description);
    }
    fields
}
