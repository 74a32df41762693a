// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire adapters between device documents and the value types.
//!
//! Each adapter owns one encoding and the endpoint that speaks it:
//!
//! - [`presets`]: JSON preset store, read from `/presets.json` and written
//!   as a whole file through `/upload`
//! - [`settings_xml`]: XML settings document read from `/win`
//! - [`settings_form`]: urlencoded form posted to `/settings/ui?`
//!
//! Reads and writes of settings use different formats and different
//! endpoints, so they are two adapters.

pub mod presets;
pub mod settings_form;
pub mod settings_xml;
