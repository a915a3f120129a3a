/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use super::{DeletePhotoInputBuilder, DeletePhotoOutput};

/// Fluent builder for deleting a single photo
#[derive(Debug)]
pub struct DeletePhotoFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: DeletePhotoInputBuilder,
}

impl DeletePhotoFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Delete the photo
    #[tracing::instrument(skip_all, level = "debug", name = "delete-photo", fields(
        photo_key = self.inner.photo_key.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<DeletePhotoOutput, crate::error::Error> {
        let input = self.inner.build()?;
        crate::operation::delete_photo::DeletePhoto::orchestrate(self.handle, input).await
    }

    /// Set the name of the album the photo belongs to.
    pub fn album_name(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.album_name(input);
        self
    }

    /// Set the name of the album the photo belongs to.
    pub fn set_album_name(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_album_name(input);
        self
    }

    /// The name of the album the photo belongs to.
    pub fn get_album_name(&self) -> &Option<String> {
        self.inner.get_album_name()
    }

    /// Set the full object key of the photo.
    pub fn photo_key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.photo_key(input);
        self
    }

    /// Set the full object key of the photo.
    pub fn set_photo_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_photo_key(input);
        self
    }

    /// The full object key of the photo.
    pub fn get_photo_key(&self) -> &Option<String> {
        self.inner.get_photo_key()
    }
}

impl DeletePhotoInputBuilder {
    /// Delete the photo with this input using the given client.
    pub async fn send_with(
        self,
        client: &crate::Client,
    ) -> Result<DeletePhotoOutput, crate::error::Error> {
        let mut fluent_builder = client.delete_photo();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
