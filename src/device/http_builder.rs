// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP device builder.

use std::time::Duration;

use crate::device::Device;
use crate::error::Error;
use crate::protocol::{HttpClient, HttpConfig};
use crate::types::Settings;

/// Builder for creating HTTP-based devices.
///
/// This builder can be created in two ways:
/// - `Device::http("host")` - Simple host string
/// - `Device::http_config(HttpConfig::new("host").with_port(8080))` - Full configuration
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use wled_lib::Device;
///
/// # async fn example() -> wled_lib::Result<()> {
/// // No network access
/// let device = Device::http("192.168.1.40").build()?;
///
/// // Verify the device answers and read its settings
/// let (device, settings) = Device::http("192.168.1.40")
///     .with_timeout(Duration::from_secs(5))
///     .connect()
///     .await?;
/// println!("{:?}", settings.description());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpDeviceBuilder {
    config: HttpConfig,
}

impl HttpDeviceBuilder {
    /// Creates a new builder with the specified HTTP configuration.
    pub(crate) fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.config = self.config.with_port(port);
        self
    }

    /// Sets a request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Returns the configuration the device will be built with.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Builds the device without touching the network.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be created.
    pub fn build(self) -> Result<Device<HttpClient>, Error> {
        let client = self.config.into_client()?;
        Ok(Device::new(client))
    }

    /// Builds the device and reads its settings to check it answers.
    ///
    /// Returns the device together with the settings that were read.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The HTTP client cannot be created
    /// - The device cannot be reached
    /// - The settings document is malformed
    pub async fn connect(self) -> Result<(Device<HttpClient>, Settings), Error> {
        let device = self.build()?;
        let settings = device.get_settings().await?;
        Ok((device, settings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Transport;

    #[test]
    fn builder_applies_options() {
        let builder = Device::http("192.168.1.40")
            .with_port(8080)
            .with_timeout(Duration::from_secs(3));
        assert_eq!(builder.config().port(), 8080);
        assert_eq!(builder.config().timeout(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn build_without_network() {
        let device = Device::http("192.168.1.40").build().unwrap();
        assert_eq!(device.transport().base_url(), "http://192.168.1.40");
        assert_eq!(
            device.transport().url("/win"),
            "http://192.168.1.40/win"
        );
    }

    #[test]
    fn build_from_config() {
        let device = Device::http_config(HttpConfig::new("wled.local").with_port(81))
            .build()
            .unwrap();
        assert_eq!(device.transport().base_url(), "http://wled.local:81");
    }

    #[test]
    fn empty_host_fails() {
        let result = Device::http("").build();
        assert!(matches!(result, Err(Error::Network(_))));
    }
}
