// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Preset store synchronization.

use crate::codec::presets;
use crate::device::Device;
use crate::error::Error;
use crate::protocol::Transport;
use crate::types::{Preset, PresetCollection, PresetConfig, PresetId};

impl<T: Transport> Device<T> {
    /// Reads the whole preset store.
    ///
    /// A device without presets yields an empty collection.
    ///
    /// # Errors
    ///
    /// Returns `Error::Network` if the request fails and `Error::Parse` if the
    /// body is not a valid preset store.
    pub async fn get_all_presets(&self) -> Result<PresetCollection, Error> {
        let response = self.transport.fetch(presets::PATH).await?;
        let collection = presets::decode(&response)?;
        tracing::debug!(count = collection.len(), "Read preset store");
        Ok(collection)
    }

    /// Reads one preset.
    ///
    /// Returns `Ok(None)` if the slot is empty; absence is not an error.
    ///
    /// # Errors
    ///
    /// Returns error if the preset store cannot be read.
    pub async fn get_preset(&self, id: &PresetId) -> Result<Option<Preset>, Error> {
        let mut collection = self.get_all_presets().await?;
        Ok(collection.remove(id))
    }

    /// Stores `preset` under `id`, replacing any preset already there.
    ///
    /// This reads the whole store, replaces one entry and uploads the whole
    /// store again. Other entries are written back unchanged. The sequence is
    /// not atomic: a change made by another writer between the read and the
    /// upload is lost.
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be read, encoded or uploaded. If the
    /// upload fails the device is assumed unchanged.
    pub async fn set_preset(&self, id: &PresetId, preset: Preset) -> Result<(), Error> {
        let mut collection = self.get_all_presets().await?;
        self.set_preset_in(&mut collection, id, preset).await
    }

    /// Stores `preset` under `id` in an already fetched collection and uploads
    /// the result.
    ///
    /// `collection` is updated only once the upload succeeded, so callers can
    /// keep using it for further changes without another read.
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be encoded or uploaded. `collection`
    /// is left unchanged in that case.
    pub async fn set_preset_in(
        &self,
        collection: &mut PresetCollection,
        id: &PresetId,
        preset: Preset,
    ) -> Result<(), Error> {
        let mut updated = collection.clone();
        let replaced = updated.insert(id.clone(), preset).is_some();
        tracing::debug!(id = %id, replaced, "Merged preset into store");
        self.set_all_presets(&updated).await?;
        *collection = updated;
        Ok(())
    }

    /// Replaces the whole preset store.
    ///
    /// Presets missing from `collection` are deleted from the device.
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be encoded or uploaded.
    pub async fn set_all_presets(&self, collection: &PresetCollection) -> Result<(), Error> {
        let upload = presets::encode(collection)?;
        self.transport
            .upload_file(presets::UPLOAD_PATH, upload)
            .await?;
        tracing::info!(count = collection.len(), "Uploaded preset store");
        Ok(())
    }

    /// Applies several changes with a single read and a single upload.
    ///
    /// `update` receives the current store and returns whether it changed
    /// anything; nothing is uploaded when it returns `false`.
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be read, encoded or uploaded.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use wled_lib::Device;
    /// use wled_lib::types::{Preset, PresetId};
    ///
    /// # async fn example() -> wled_lib::Result<()> {
    /// let device = Device::http("wled.local").build()?;
    /// device
    ///     .update_presets(|presets| {
    ///         presets.insert(PresetId::from(1), Preset::named("Morning"));
    ///         presets.insert(PresetId::from(2), Preset::named("Evening"));
    ///         true
    ///     })
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn update_presets<F>(&self, update: F) -> Result<PresetCollection, Error>
    where
        F: FnOnce(&mut PresetCollection) -> bool,
    {
        let mut collection = self.get_all_presets().await?;
        if update(&mut collection) {
            self.set_all_presets(&collection).await?;
        } else {
            tracing::debug!("Preset store unchanged, skipping upload");
        }
        Ok(collection)
    }

    /// Resolves `config` with firmware defaults and stores it under `id`.
    ///
    /// Returns the preset that was stored.
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be read, encoded or uploaded.
    pub async fn apply_preset_config(
        &self,
        id: &PresetId,
        config: &PresetConfig,
    ) -> Result<Preset, Error> {
        let preset = config.resolve();
        self.set_preset(id, preset.clone()).await?;
        Ok(preset)
    }

    /// Removes the preset stored under `id`.
    ///
    /// Returns `false` without uploading if the slot was already empty.
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be read, encoded or uploaded.
    pub async fn delete_preset(&self, id: &PresetId) -> Result<bool, Error> {
        let mut collection = self.get_all_presets().await?;
        if collection.remove(id).is_none() {
            return Ok(false);
        }
        self.set_all_presets(&collection).await?;
        tracing::info!(id = %id, "Deleted preset");
        Ok(true)
    }
}
