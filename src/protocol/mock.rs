// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory transport that behaves like a device file system.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::NetworkError;
use crate::protocol::{FileUpload, FormFields, RawResponse, Transport};

/// Records every request and serves GETs from an in-memory file table.
///
/// Uploaded files become readable under `/<file_name>`, like the firmware.
#[derive(Debug, Default)]
pub(crate) struct MockTransport {
    files: RefCell<HashMap<String, String>>,
    fetches: RefCell<Vec<String>>,
    uploads: RefCell<Vec<(String, FileUpload)>>,
    forms: RefCell<Vec<(String, FormFields)>>,
    fail_uploads: Cell<bool>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_file(self, path: &str, body: &str) -> Self {
        self.files
            .borrow_mut()
            .insert(path.to_string(), body.to_string());
        self
    }

    pub(crate) fn failing_uploads(self) -> Self {
        self.fail_uploads.set(true);
        self
    }

    pub(crate) fn file(&self, path: &str) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    pub(crate) fn fetches(&self) -> Vec<String> {
        self.fetches.borrow().clone()
    }

    pub(crate) fn uploads(&self) -> Vec<(String, FileUpload)> {
        self.uploads.borrow().clone()
    }

    pub(crate) fn forms(&self) -> Vec<(String, FormFields)> {
        self.forms.borrow().clone()
    }
}

impl Transport for MockTransport {
    fn url(&self, path: &str) -> String {
        format!("http://mock{path}")
    }

    async fn fetch(&self, path: &str) -> Result<RawResponse, NetworkError> {
        self.fetches.borrow_mut().push(path.to_string());
        match self.files.borrow().get(path) {
            Some(body) => Ok(RawResponse::new(self.url(path), body.clone())),
            None => Err(NetworkError::Status {
                url: self.url(path),
                status: 404,
                reason: "Not Found".to_string(),
            }),
        }
    }

    async fn upload_file(&self, path: &str, file: FileUpload) -> Result<(), NetworkError> {
        if self.fail_uploads.get() {
            return Err(NetworkError::Status {
                url: self.url(path),
                status: 500,
                reason: "Internal Server Error".to_string(),
            });
        }
        let body = String::from_utf8_lossy(&file.content).into_owned();
        self.files
            .borrow_mut()
            .insert(format!("/{}", file.file_name), body);
        self.uploads.borrow_mut().push((path.to_string(), file));
        Ok(())
    }

    async fn post_form(&self, path: &str, fields: &FormFields) -> Result<(), NetworkError> {
        self.forms
            .borrow_mut()
            .push((path.to_string(), fields.clone()));
        Ok(())
    }
}
