/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::{Album, Photo};

/// Output type for viewing an album
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct ViewAlbumOutput {
    /// The album that was listed
    pub album: Album,

    /// Photos in the album in listing order, without the album marker
    pub photos: Option<Vec<Photo>>,
}

impl ViewAlbumOutput {
    /// Creates a new builder-style object to manufacture [`ViewAlbumOutput`](crate::operation::view_album::ViewAlbumOutput).
    pub fn builder() -> ViewAlbumOutputBuilder {
        ViewAlbumOutputBuilder::default()
    }

    /// The album that was listed
    pub fn album(&self) -> &Album {
        &self.album
    }

    /// Photos in the album in listing order, without the album marker
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was
    /// set, use `.photos.is_none()`
    pub fn photos(&self) -> &[Photo] {
        self.photos.as_deref().unwrap_or_default()
    }
}

/// A builder for [`ViewAlbumOutput`](crate::operation::view_album::ViewAlbumOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct ViewAlbumOutputBuilder {
    pub(crate) album: Option<Album>,
    pub(crate) photos: Option<Vec<Photo>>,
}

impl ViewAlbumOutputBuilder {
    /// The album that was listed
    pub fn album(mut self, input: Album) -> Self {
        self.album = Some(input);
        self
    }

    /// The album that was listed
    pub fn get_album(&self) -> &Option<Album> {
        &self.album
    }

    /// Append a photo.
    ///
    /// To override the contents of this collection use [`set_photos`](Self::set_photos)
    pub fn photos(mut self, input: Photo) -> Self {
        self.photos.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Photos in the album
    pub fn set_photos(mut self, input: Option<Vec<Photo>>) -> Self {
        self.photos = input;
        self
    }

    /// Photos in the album
    pub fn get_photos(&self) -> &Option<Vec<Photo>> {
        &self.photos
    }

    /// Consume the builder and return the output
    ///
    /// # Panics
    ///
    /// Panics if no album was set.
    pub fn build(self) -> ViewAlbumOutput {
        ViewAlbumOutput {
            album: self.album.expect("album set"),
            photos: self.photos,
        }
    }
}
