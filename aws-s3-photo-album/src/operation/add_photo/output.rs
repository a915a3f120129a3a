/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for adding a photo to an album
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct AddPhotoOutput {
    /// The object key the photo was stored under
    pub photo_key: String,

    /// Entity tag of the uploaded object
    pub e_tag: Option<String>,
}

impl AddPhotoOutput {
    /// Creates a new builder-style object to manufacture [`AddPhotoOutput`](crate::operation::add_photo::AddPhotoOutput).
    pub fn builder() -> AddPhotoOutputBuilder {
        AddPhotoOutputBuilder::default()
    }

    /// The object key the photo was stored under
    pub fn photo_key(&self) -> &str {
        &self.photo_key
    }

    /// Entity tag of the uploaded object
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }
}

/// A builder for [`AddPhotoOutput`](crate::operation::add_photo::AddPhotoOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct AddPhotoOutputBuilder {
    pub(crate) photo_key: String,
    pub(crate) e_tag: Option<String>,
}

impl AddPhotoOutputBuilder {
    /// The object key the photo was stored under
    pub fn photo_key(mut self, input: impl Into<String>) -> Self {
        self.photo_key = input.into();
        self
    }

    /// The object key the photo was stored under
    pub fn get_photo_key(&self) -> &str {
        &self.photo_key
    }

    /// Entity tag of the uploaded object
    pub fn set_e_tag(mut self, input: Option<String>) -> Self {
        self.e_tag = input;
        self
    }

    /// Entity tag of the uploaded object
    pub fn get_e_tag(&self) -> &Option<String> {
        &self.e_tag
    }

    /// Consume the builder and return the output
    pub fn build(self) -> AddPhotoOutput {
        AddPhotoOutput {
            photo_key: self.photo_key,
            e_tag: self.e_tag,
        }
    }
}
