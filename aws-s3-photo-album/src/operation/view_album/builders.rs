/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use super::{ViewAlbumInputBuilder, ViewAlbumOutput};

/// Fluent builder for viewing an album
#[derive(Debug)]
pub struct ViewAlbumFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: ViewAlbumInputBuilder,
}

impl ViewAlbumFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// View the album
    #[tracing::instrument(skip_all, level = "debug", name = "view-album", fields(
        album_name = self.inner.album_name.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<ViewAlbumOutput, crate::error::Error> {
        let input = self.inner.build()?;
        crate::operation::view_album::ViewAlbum::orchestrate(self.handle, input).await
    }

    /// Set the name of the album to view.
    pub fn album_name(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.album_name(input);
        self
    }

    /// Set the name of the album to view.
    pub fn set_album_name(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_album_name(input);
        self
    }

    /// The name of the album to view.
    pub fn get_album_name(&self) -> &Option<String> {
        self.inner.get_album_name()
    }
}

impl ViewAlbumInputBuilder {
    /// View the album with this input using the given client.
    pub async fn send_with(
        self,
        client: &crate::Client,
    ) -> Result<ViewAlbumOutput, crate::error::Error> {
        let mut fluent_builder = client.view_album();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
