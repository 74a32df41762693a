// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device-level synchronization of presets and settings.
//!
//! A [`Device`] wraps one transport and exposes two independent sync paths:
//!
//! - **Presets**: the firmware stores every preset in one file and only
//!   supports replacing it whole. Changing one preset is a read-modify-write:
//!   fetch the full store, change one entry, upload the full store.
//! - **Settings**: read as XML from one endpoint, written as a form to
//!   another.
//!
//! Failures on one path never touch the other.
//!
//! # Concurrency
//!
//! Operations run their requests one after another and keep no state between
//! calls, so devices on different hosts can be driven concurrently. Two
//! writers targeting the preset store of the *same* device race in the window
//! between read and upload: last writer wins, and preset changes made by
//! the other writer in that window are lost. There is no locking or version
//! check. To shrink the window when changing several presets, batch them with
//! [`Device::update_presets`].
//!
//! # Examples
//!
//! ```no_run
//! use wled_lib::Device;
//! use wled_lib::types::{PresetConfig, PresetId};
//!
//! # async fn example() -> wled_lib::Result<()> {
//! let device = Device::http("wled-kitchen.local").build()?;
//!
//! let id = PresetId::slot(3)?;
//! device
//!     .apply_preset_config(&id, &PresetConfig::new().with_name("Sunset"))
//!     .await?;
//!
//! match device.get_preset(&id).await? {
//!     Some(preset) => println!("stored: {}", preset.name),
//!     None => println!("slot {id} is empty"),
//! }
//! # Ok(())
//! # }
//! ```

mod http_builder;
mod presets;
mod settings;

pub use http_builder::HttpDeviceBuilder;

use crate::protocol::{HttpClient, HttpConfig, Transport};

/// A WLED device reachable through a transport.
#[derive(Debug)]
pub struct Device<T: Transport> {
    transport: T,
}

impl Device<HttpClient> {
    /// Creates a builder for an HTTP device.
    ///
    /// # Arguments
    ///
    /// * `host` - Bare hostname or IP address, without scheme
    #[must_use]
    pub fn http(host: impl Into<String>) -> HttpDeviceBuilder {
        HttpDeviceBuilder::new(HttpConfig::new(host))
    }

    /// Creates a builder for an HTTP device from a full configuration.
    #[must_use]
    pub fn http_config(config: HttpConfig) -> HttpDeviceBuilder {
        HttpDeviceBuilder::new(config)
    }
}

impl<T: Transport> Device<T> {
    /// Creates a device on top of an existing transport.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }
}
