/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for viewing an album
pub use input::{ViewAlbumInput, ViewAlbumInputBuilder};
mod output;
/// Output type for viewing an album
pub use output::{ViewAlbumOutput, ViewAlbumOutputBuilder};

use std::sync::Arc;

use crate::error;
use crate::operation::list_objects::ListObjectsPaginator;
use crate::types::{Album, Photo};

/// Operation struct for viewing the photos of an album
#[derive(Clone, Default, Debug)]
pub(crate) struct ViewAlbum;

impl ViewAlbum {
    /// Execute a single `ViewAlbum` operation
    ///
    /// Every key under the album prefix is a photo except the album marker itself, which is
    /// excluded wherever it appears in the listing.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: ViewAlbumInput,
    ) -> Result<ViewAlbumOutput, error::Error> {
        let album = Album::from_name(input.album_name().unwrap_or_default());
        let listing = ListObjectsPaginator::new(handle.clone())
            .prefix(album.key())
            .collect()
            .await?;

        let photos = listing
            .keys
            .into_iter()
            .filter(|key| key != album.key())
            .filter_map(|key| {
                let name = key.strip_prefix(album.key())?.to_owned();
                let url = handle.config.object_url(&key);
                Some(Photo { key, name, url })
            })
            .collect::<Vec<_>>();
        tracing::debug!("album {} has {} photos", album.key(), photos.len());

        Ok(ViewAlbumOutput::builder()
            .album(album)
            .set_photos(Some(photos))
            .build())
    }
}
