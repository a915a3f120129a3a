/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::Album;

/// Output type for creating an album
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct CreateAlbumOutput {
    /// The created album
    pub album: Album,
}

impl CreateAlbumOutput {
    /// Creates a new builder-style object to manufacture [`CreateAlbumOutput`](crate::operation::create_album::CreateAlbumOutput).
    pub fn builder() -> CreateAlbumOutputBuilder {
        CreateAlbumOutputBuilder::default()
    }

    /// The created album
    pub fn album(&self) -> &Album {
        &self.album
    }
}

/// A builder for [`CreateAlbumOutput`](crate::operation::create_album::CreateAlbumOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct CreateAlbumOutputBuilder {
    pub(crate) album: Option<Album>,
}

impl CreateAlbumOutputBuilder {
    /// The created album
    pub fn album(mut self, input: Album) -> Self {
        self.album = Some(input);
        self
    }

    /// The created album
    pub fn get_album(&self) -> &Option<Album> {
        &self.album
    }

    /// Consume the builder and return the output
    ///
    /// # Panics
    ///
    /// Panics if no album was set.
    pub fn build(self) -> CreateAlbumOutput {
        CreateAlbumOutput {
            album: self.album.expect("album set"),
        }
    }
}
