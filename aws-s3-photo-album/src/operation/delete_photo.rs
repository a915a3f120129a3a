/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for deleting a photo
pub use input::{DeletePhotoInput, DeletePhotoInputBuilder};
mod output;
/// Output type for deleting a photo
pub use output::{DeletePhotoOutput, DeletePhotoOutputBuilder};

use std::sync::Arc;

use crate::error;

/// Operation struct for deleting a single photo
#[derive(Clone, Default, Debug)]
pub(crate) struct DeletePhoto;

impl DeletePhoto {
    /// Execute a single `DeletePhoto` operation
    ///
    /// S3 reports success for keys that don't exist, so deleting a photo twice is not an error.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: DeletePhotoInput,
    ) -> Result<DeletePhotoOutput, error::Error> {
        let photo_key = input.photo_key().unwrap_or_default();
        tracing::debug!("deleting photo {photo_key}");
        handle
            .client()
            .delete_object()
            .bucket(handle.bucket())
            .key(photo_key)
            .send()
            .await?;

        Ok(DeletePhotoOutput::builder()
            .set_album_name(input.album_name)
            .set_photo_key(input.photo_key)
            .build())
    }
}
