/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for adding a photo to an album
pub use input::{AddPhotoInput, AddPhotoInputBuilder};
mod output;
/// Output type for adding a photo to an album
pub use output::{AddPhotoOutput, AddPhotoOutputBuilder};

use std::sync::Arc;

use crate::error;

/// Operation struct for uploading a photo into an album
#[derive(Clone, Default, Debug)]
pub(crate) struct AddPhoto;

impl AddPhoto {
    /// Execute a single `AddPhoto` operation
    ///
    /// The photo key is the album key followed by the file name. An existing photo with the
    /// same file name is overwritten. The album itself is neither validated nor created.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        mut input: AddPhotoInput,
    ) -> Result<AddPhotoOutput, error::Error> {
        let file = input
            .file
            .take()
            .ok_or_else(|| error::invalid_input("Choose a file to upload first."))?;
        let album_name = input.album_name().unwrap_or_default();
        let key = crate::key::photo_key(album_name, file.name())?;

        tracing::debug!("uploading {} with object key {key}", file.name());
        let body = file.into_byte_stream().await?;
        let output = handle
            .client()
            .put_object()
            .bucket(handle.bucket())
            .key(&key)
            .body(body)
            .send()
            .await?;

        Ok(AddPhotoOutput::builder()
            .photo_key(key)
            .set_e_tag(output.e_tag)
            .build())
    }
}
