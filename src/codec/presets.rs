// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON codec for the preset store.

use crate::error::{EncodeError, ParseError};
use crate::protocol::{FileUpload, RawResponse};
use crate::types::PresetCollection;

/// Path the preset store is read from.
pub const PATH: &str = "/presets.json";

/// Path files are uploaded to.
pub const UPLOAD_PATH: &str = "/upload";

/// File name the firmware stores presets under.
pub const FILE_NAME: &str = "presets.json";

/// Decodes the preset store.
///
/// An empty body is a valid, empty store.
///
/// # Errors
///
/// Returns `ParseError::Json` with the URL and raw body if the body is not a
/// JSON object of presets. No partial collection is returned.
pub fn decode(response: &RawResponse) -> Result<PresetCollection, ParseError> {
    let body = response.body();
    if body.trim().is_empty() {
        return Ok(PresetCollection::new());
    }
    serde_json::from_str(body).map_err(|source| ParseError::Json {
        url: response.url().to_string(),
        body: body.to_string(),
        source,
    })
}

/// Encodes the preset store as the file the firmware expects.
///
/// # Errors
///
/// Returns `EncodeError::Json` if serialization fails.
pub fn encode(presets: &PresetCollection) -> Result<FileUpload, EncodeError> {
    let content = serde_json::to_vec(presets)?;
    Ok(FileUpload::json(FILE_NAME, content))
}
