/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::Album;

/// Output type for listing albums
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct ListAlbumsOutput {
    /// Albums in listing order
    pub albums: Option<Vec<Album>>,
}

impl ListAlbumsOutput {
    /// Creates a new builder-style object to manufacture [`ListAlbumsOutput`](crate::operation::list_albums::ListAlbumsOutput).
    pub fn builder() -> ListAlbumsOutputBuilder {
        ListAlbumsOutputBuilder::default()
    }

    /// Albums in listing order
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was
    /// set, use `.albums.is_none()`
    pub fn albums(&self) -> &[Album] {
        self.albums.as_deref().unwrap_or_default()
    }
}

/// A builder for [`ListAlbumsOutput`](crate::operation::list_albums::ListAlbumsOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct ListAlbumsOutputBuilder {
    pub(crate) albums: Option<Vec<Album>>,
}

impl ListAlbumsOutputBuilder {
    /// Append an album.
    ///
    /// To override the contents of this collection use [`set_albums`](Self::set_albums)
    pub fn albums(mut self, input: Album) -> Self {
        self.albums.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Albums in listing order
    pub fn set_albums(mut self, input: Option<Vec<Album>>) -> Self {
        self.albums = input;
        self
    }

    /// Albums in listing order
    pub fn get_albums(&self) -> &Option<Vec<Album>> {
        &self.albums
    }

    /// Consume the builder and return the output
    pub fn build(self) -> ListAlbumsOutput {
        ListAlbumsOutput {
            albums: self.albums,
        }
    }
}
