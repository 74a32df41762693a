// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Settings synchronization.

use crate::codec::{settings_form, settings_xml};
use crate::device::Device;
use crate::error::Error;
use crate::protocol::Transport;
use crate::types::Settings;

impl<T: Transport> Device<T> {
    /// Reads the settings document.
    ///
    /// # Errors
    ///
    /// Returns `Error::Network` if the request fails and `Error::Parse` if the
    /// body is not a valid settings document.
    pub async fn get_settings(&self) -> Result<Settings, Error> {
        let response = self.transport.fetch(settings_xml::PATH).await?;
        let settings = settings_xml::decode(&response)?;
        tracing::debug!(
            description = ?settings.description(),
            fields = settings.passthrough().len(),
            "Read settings"
        );
        Ok(settings)
    }

    /// Writes the managed settings fields.
    ///
    /// Unset fields are left out of the form, so the device keeps its stored
    /// values for them. The settings are not read back afterwards.
    ///
    /// # Errors
    ///
    /// Returns `Error::Network` if the request fails.
    pub async fn set_settings(&self, settings: &Settings) -> Result<(), Error> {
        let fields = settings_form::encode(settings);
        self.transport
            .post_form(settings_form::PATH, &fields)
            .await?;
        tracing::info!(fields = fields.len(), "Posted settings");
        Ok(())
    }
}
