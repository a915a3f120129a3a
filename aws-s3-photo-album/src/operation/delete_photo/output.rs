/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for deleting a photo
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct DeletePhotoOutput {
    /// The album the photo belonged to
    pub album_name: Option<String>,

    /// The deleted object key
    pub photo_key: Option<String>,
}

impl DeletePhotoOutput {
    /// Creates a new builder-style object to manufacture [`DeletePhotoOutput`](crate::operation::delete_photo::DeletePhotoOutput).
    pub fn builder() -> DeletePhotoOutputBuilder {
        DeletePhotoOutputBuilder::default()
    }

    /// The album the photo belonged to
    pub fn album_name(&self) -> &str {
        self.album_name.as_deref().unwrap_or_default()
    }

    /// The deleted object key
    pub fn photo_key(&self) -> &str {
        self.photo_key.as_deref().unwrap_or_default()
    }
}

/// A builder for [`DeletePhotoOutput`](crate::operation::delete_photo::DeletePhotoOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct DeletePhotoOutputBuilder {
    pub(crate) album_name: Option<String>,
    pub(crate) photo_key: Option<String>,
}

impl DeletePhotoOutputBuilder {
    /// The album the photo belonged to
    pub fn set_album_name(mut self, input: Option<String>) -> Self {
        self.album_name = input;
        self
    }

    /// The deleted object key
    pub fn set_photo_key(mut self, input: Option<String>) -> Self {
        self.photo_key = input;
        self
    }

    /// Consume the builder and return the output
    pub fn build(self) -> DeletePhotoOutput {
        DeletePhotoOutput {
            album_name: self.album_name,
            photo_key: self.photo_key,
        }
    }
}
