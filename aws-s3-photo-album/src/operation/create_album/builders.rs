/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use super::{CreateAlbumInputBuilder, CreateAlbumOutput};

/// Fluent builder for creating an album
#[derive(Debug)]
pub struct CreateAlbumFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: CreateAlbumInputBuilder,
}

impl CreateAlbumFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Create the album
    #[tracing::instrument(skip_all, level = "debug", name = "create-album", fields(
        album_name = self.inner.album_name.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<CreateAlbumOutput, crate::error::Error> {
        let input = self.inner.build()?;
        crate::operation::create_album::CreateAlbum::orchestrate(self.handle, input).await
    }

    /// Set the name of the album to create.
    pub fn album_name(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.album_name(input);
        self
    }

    /// Set the name of the album to create.
    pub fn set_album_name(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_album_name(input);
        self
    }

    /// The name of the album to create.
    pub fn get_album_name(&self) -> &Option<String> {
        self.inner.get_album_name()
    }
}

impl CreateAlbumInputBuilder {
    /// Create the album with this input using the given client.
    pub async fn send_with(
        self,
        client: &crate::Client,
    ) -> Result<CreateAlbumOutput, crate::error::Error> {
        let mut fluent_builder = client.create_album();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
