/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for deleting a photo
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct DeletePhotoInput {
    /// The name of the album the photo belongs to.
    pub album_name: Option<String>,

    /// The full object key of the photo (not just its file name).
    pub photo_key: Option<String>,
}

impl DeletePhotoInput {
    /// Creates a new builder-style object to manufacture [`DeletePhotoInput`](crate::operation::delete_photo::DeletePhotoInput).
    pub fn builder() -> DeletePhotoInputBuilder {
        DeletePhotoInputBuilder::default()
    }

    /// The name of the album the photo belongs to.
    pub fn album_name(&self) -> Option<&str> {
        self.album_name.as_deref()
    }

    /// The full object key of the photo.
    pub fn photo_key(&self) -> Option<&str> {
        self.photo_key.as_deref()
    }
}

/// A builder for [`DeletePhotoInput`](crate::operation::delete_photo::DeletePhotoInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct DeletePhotoInputBuilder {
    pub(crate) album_name: Option<String>,
    pub(crate) photo_key: Option<String>,
}

impl DeletePhotoInputBuilder {
    /// Set the name of the album the photo belongs to.
    pub fn album_name(mut self, input: impl Into<String>) -> Self {
        self.album_name = Some(input.into());
        self
    }

    /// Set the name of the album the photo belongs to.
    pub fn set_album_name(mut self, input: Option<String>) -> Self {
        self.album_name = input;
        self
    }

    /// The name of the album the photo belongs to.
    pub fn get_album_name(&self) -> &Option<String> {
        &self.album_name
    }

    /// Set the full object key of the photo, e.g. `Trip%202024/beach.jpg`.
    ///
    /// NOTE: A photo key is required.
    pub fn photo_key(mut self, input: impl Into<String>) -> Self {
        self.photo_key = Some(input.into());
        self
    }

    /// Set the full object key of the photo.
    pub fn set_photo_key(mut self, input: Option<String>) -> Self {
        self.photo_key = input;
        self
    }

    /// The full object key of the photo.
    pub fn get_photo_key(&self) -> &Option<String> {
        &self.photo_key
    }

    /// Consumes the builder and constructs a [`DeletePhotoInput`](crate::operation::delete_photo::DeletePhotoInput).
    pub fn build(self) -> Result<DeletePhotoInput, BuildError> {
        if self.photo_key.is_none() {
            return Err(BuildError::missing_field(
                "photo_key",
                "A photo key is required",
            ));
        }

        Ok(DeletePhotoInput {
            album_name: self.album_name,
            photo_key: self.photo_key,
        })
    }
}
