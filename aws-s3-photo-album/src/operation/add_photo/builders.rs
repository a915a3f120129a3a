/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::types::PhotoFile;

use super::{AddPhotoInputBuilder, AddPhotoOutput};

/// Fluent builder for uploading a photo into an album
#[derive(Debug)]
pub struct AddPhotoFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: AddPhotoInputBuilder,
}

impl AddPhotoFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Upload the photo
    #[tracing::instrument(skip_all, level = "debug", name = "add-photo", fields(
        album_name = self.inner.album_name.as_deref().unwrap_or_default(),
        file_name = self.inner.file.as_ref().map(|f| f.name()).unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<AddPhotoOutput, crate::error::Error> {
        let input = self.inner.build()?;
        crate::operation::add_photo::AddPhoto::orchestrate(self.handle, input).await
    }

    /// Set the name of the album the photo is added to.
    pub fn album_name(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.album_name(input);
        self
    }

    /// Set the name of the album the photo is added to.
    pub fn set_album_name(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_album_name(input);
        self
    }

    /// The name of the album the photo is added to.
    pub fn get_album_name(&self) -> &Option<String> {
        self.inner.get_album_name()
    }

    /// Set the photo to upload.
    pub fn file(mut self, input: PhotoFile) -> Self {
        self.inner = self.inner.file(input);
        self
    }

    /// Set the photo to upload.
    pub fn set_file(mut self, input: Option<PhotoFile>) -> Self {
        self.inner = self.inner.set_file(input);
        self
    }

    /// The photo to upload.
    pub fn get_file(&self) -> &Option<PhotoFile> {
        self.inner.get_file()
    }
}

impl AddPhotoInputBuilder {
    /// Upload the photo with this input using the given client.
    pub async fn send_with(
        self,
        client: &crate::Client,
    ) -> Result<AddPhotoOutput, crate::error::Error> {
        let mut fluent_builder = client.add_photo();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
