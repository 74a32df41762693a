// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport layer for talking to WLED devices.
//!
//! The transport knows how to issue three kinds of request against a device:
//! a plain GET, a multipart file upload, and a form-encoded POST. It owns no
//! state between calls and never decodes bodies itself; choosing between the
//! JSON and XML codecs belongs to the caller.
//!
//! No retries are attempted. Any failure propagates immediately.

mod form;
mod http;
#[cfg(test)]
pub(crate) mod mock;

pub use form::FormFields;
pub use http::{HttpClient, HttpClientBuilder, HttpConfig};

use crate::error::NetworkError;

/// Name of the multipart field the firmware upload handler reads.
pub const UPLOAD_FIELD: &str = "filename";

/// Raw body returned by a GET request.
#[derive(Debug, Clone)]
pub struct RawResponse {
    url: String,
    body: String,
}

impl RawResponse {
    /// Creates a response for the given URL and body.
    #[must_use]
    pub fn new(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body: body.into(),
        }
    }

    /// Returns the URL that produced this body.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the raw body text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// A whole file to be written to the device file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// File name the device stores the content under.
    pub file_name: String,
    /// MIME type of the file part.
    pub content_type: &'static str,
    /// The complete file content.
    pub content: Vec<u8>,
}

impl FileUpload {
    /// Creates a JSON file upload.
    #[must_use]
    pub fn json(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: "application/json",
            content,
        }
    }
}

/// Trait for transports that can reach a single WLED device.
///
/// Paths are absolute on the device (e.g. `/presets.json`). Implementations
/// must treat any non-2xx status as [`NetworkError::Status`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Returns the full URL for a device path, used for diagnostics.
    fn url(&self, path: &str) -> String;

    /// Issues a GET request and returns the raw body.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError` if the request fails or the status is not 2xx.
    async fn fetch(&self, path: &str) -> Result<RawResponse, NetworkError>;

    /// Uploads a single file as a `multipart/form-data` POST.
    ///
    /// The file part is always named [`UPLOAD_FIELD`]; the firmware replaces
    /// the stored file as a whole.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError` if the request fails or the status is not 2xx.
    async fn upload_file(&self, path: &str, file: FileUpload) -> Result<(), NetworkError>;

    /// Issues an `application/x-www-form-urlencoded` POST.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError` if the request fails or the status is not 2xx.
    async fn post_form(&self, path: &str, fields: &FormFields) -> Result<(), NetworkError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_upload_content_type() {
        let upload = FileUpload::json("presets.json", b"{}".to_vec());
        assert_eq!(upload.file_name, "presets.json");
        assert_eq!(upload.content_type, "application/json");
        assert_eq!(upload.content, b"{}");
    }

    #[test]
    fn raw_response_accessors() {
        let response = RawResponse::new("http://wled.local/win", "<vs></vs>");
        assert_eq!(response.url(), "http://wled.local/win");
        assert_eq!(response.body(), "<vs></vs>");
    }
}
