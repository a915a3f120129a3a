/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::Album;

/// Output type for deleting an album
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct DeleteAlbumOutput {
    /// The album that was deleted
    pub album: Album,

    /// Number of objects removed, including the album marker
    pub objects_deleted: u64,
}

impl DeleteAlbumOutput {
    /// Creates a new builder-style object to manufacture [`DeleteAlbumOutput`](crate::operation::delete_album::DeleteAlbumOutput).
    pub fn builder() -> DeleteAlbumOutputBuilder {
        DeleteAlbumOutputBuilder::default()
    }

    /// The album that was deleted
    pub fn album(&self) -> &Album {
        &self.album
    }

    /// Number of objects removed, including the album marker
    pub fn objects_deleted(&self) -> u64 {
        self.objects_deleted
    }
}

/// A builder for [`DeleteAlbumOutput`](crate::operation::delete_album::DeleteAlbumOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct DeleteAlbumOutputBuilder {
    pub(crate) album: Option<Album>,
    pub(crate) objects_deleted: u64,
}

impl DeleteAlbumOutputBuilder {
    /// The album that was deleted
    pub fn album(mut self, input: Album) -> Self {
        self.album = Some(input);
        self
    }

    /// Number of objects removed
    pub fn objects_deleted(mut self, input: u64) -> Self {
        self.objects_deleted = input;
        self
    }

    /// Consume the builder and return the output
    ///
    /// # Panics
    ///
    /// Panics if no album was set.
    pub fn build(self) -> DeleteAlbumOutput {
        DeleteAlbumOutput {
            album: self.album.expect("album set"),
            objects_deleted: self.objects_deleted,
        }
    }
}
