/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for deleting an album
pub use input::{DeleteAlbumInput, DeleteAlbumInputBuilder};
mod output;
/// Output type for deleting an album
pub use output::{DeleteAlbumOutput, DeleteAlbumOutputBuilder};

use std::sync::Arc;

use aws_sdk_s3::types::{Delete, ObjectIdentifier};

use crate::error;
use crate::operation::list_objects::ListObjectsPaginator;
use crate::types::Album;

/// Maximum number of keys accepted by a single `DeleteObjects` request
const MAX_KEYS_PER_DELETE: usize = 1000;

/// Operation struct for deleting an album and its photos
#[derive(Clone, Default, Debug)]
pub(crate) struct DeleteAlbum;

impl DeleteAlbum {
    /// Execute a single `DeleteAlbum` operation
    ///
    /// Lists every key under the album prefix and removes them with quiet bulk deletes. Objects
    /// written under the prefix after the listing completes are not removed.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: DeleteAlbumInput,
    ) -> Result<DeleteAlbumOutput, error::Error> {
        let album = Album::from_name(input.album_name().unwrap_or_default());
        let listing = ListObjectsPaginator::new(handle.clone())
            .prefix(album.key())
            .collect()
            .await?;

        let mut objects_deleted = 0;
        for chunk in listing.keys.chunks(MAX_KEYS_PER_DELETE) {
            let objects = chunk
                .iter()
                .map(|key| ObjectIdentifier::builder().key(key).build())
                .collect::<Result<Vec<_>, _>>()?;
            let delete = Delete::builder()
                .set_objects(Some(objects))
                .quiet(true)
                .build()?;

            let output = handle
                .client()
                .delete_objects()
                .bucket(handle.bucket())
                .delete(delete)
                .send()
                .await?;

            if let Some(failed) = output.errors().first() {
                tracing::warn!(
                    "{} keys under {} could not be deleted",
                    output.errors().len(),
                    album.key()
                );
                let message = format!(
                    "{}: {}",
                    failed.key().unwrap_or_default(),
                    failed
                        .message()
                        .or(failed.code())
                        .unwrap_or("unknown error")
                );
                return Err(error::storage_failed(message));
            }
            objects_deleted += chunk.len() as u64;
        }
        tracing::debug!("deleted {objects_deleted} objects under {}", album.key());

        Ok(DeleteAlbumOutput::builder()
            .album(album)
            .objects_deleted(objects_deleted)
            .build())
    }
}
