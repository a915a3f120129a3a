/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::types::PhotoFile;

/// Input type for adding a photo to an album
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct AddPhotoInput {
    /// The name of the album the photo is added to.
    pub album_name: Option<String>,

    /// The selected photo, if any.
    pub file: Option<PhotoFile>,
}

impl AddPhotoInput {
    /// Creates a new builder-style object to manufacture [`AddPhotoInput`](crate::operation::add_photo::AddPhotoInput).
    pub fn builder() -> AddPhotoInputBuilder {
        AddPhotoInputBuilder::default()
    }

    /// The name of the album the photo is added to.
    pub fn album_name(&self) -> Option<&str> {
        self.album_name.as_deref()
    }

    /// The selected photo, if any.
    pub fn file(&self) -> Option<&PhotoFile> {
        self.file.as_ref()
    }
}

/// A builder for [`AddPhotoInput`](crate::operation::add_photo::AddPhotoInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct AddPhotoInputBuilder {
    pub(crate) album_name: Option<String>,
    pub(crate) file: Option<PhotoFile>,
}

impl AddPhotoInputBuilder {
    /// Set the name of the album the photo is added to.
    ///
    /// NOTE: An album name is required.
    pub fn album_name(mut self, input: impl Into<String>) -> Self {
        self.album_name = Some(input.into());
        self
    }

    /// Set the name of the album the photo is added to.
    pub fn set_album_name(mut self, input: Option<String>) -> Self {
        self.album_name = input;
        self
    }

    /// The name of the album the photo is added to.
    pub fn get_album_name(&self) -> &Option<String> {
        &self.album_name
    }

    /// Set the photo to upload.
    ///
    /// Sending without a photo fails with an input validation error.
    pub fn file(mut self, input: PhotoFile) -> Self {
        self.file = Some(input);
        self
    }

    /// Set the photo to upload.
    pub fn set_file(mut self, input: Option<PhotoFile>) -> Self {
        self.file = input;
        self
    }

    /// The photo to upload.
    pub fn get_file(&self) -> &Option<PhotoFile> {
        &self.file
    }

    /// Consumes the builder and constructs an [`AddPhotoInput`](crate::operation::add_photo::AddPhotoInput).
    pub fn build(self) -> Result<AddPhotoInput, BuildError> {
        if self.album_name.is_none() {
            return Err(BuildError::missing_field(
                "album_name",
                "An album name is required",
            ));
        }

        Ok(AddPhotoInput {
            album_name: self.album_name,
            file: self.file,
        })
    }
}
