/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for creating an album
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct CreateAlbumInput {
    /// The raw album name as entered by the user.
    pub album_name: Option<String>,
}

impl CreateAlbumInput {
    /// Creates a new builder-style object to manufacture [`CreateAlbumInput`](crate::operation::create_album::CreateAlbumInput).
    pub fn builder() -> CreateAlbumInputBuilder {
        CreateAlbumInputBuilder::default()
    }

    /// The raw album name as entered by the user.
    pub fn album_name(&self) -> Option<&str> {
        self.album_name.as_deref()
    }
}

/// A builder for [`CreateAlbumInput`](crate::operation::create_album::CreateAlbumInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct CreateAlbumInputBuilder {
    pub(crate) album_name: Option<String>,
}

impl CreateAlbumInputBuilder {
    /// Set the name of the album to create.
    ///
    /// Surrounding whitespace is trimmed. The trimmed name must not be empty and must not
    /// contain `/`.
    ///
    /// NOTE: An album name is required.
    pub fn album_name(mut self, input: impl Into<String>) -> Self {
        self.album_name = Some(input.into());
        self
    }

    /// Set the name of the album to create.
    pub fn set_album_name(mut self, input: Option<String>) -> Self {
        self.album_name = input;
        self
    }

    /// The name of the album to create.
    pub fn get_album_name(&self) -> &Option<String> {
        &self.album_name
    }

    /// Consumes the builder and constructs a [`CreateAlbumInput`](crate::operation::create_album::CreateAlbumInput).
    pub fn build(self) -> Result<CreateAlbumInput, BuildError> {
        if self.album_name.is_none() {
            return Err(BuildError::missing_field(
                "album_name",
                "An album name is required",
            ));
        }

        Ok(CreateAlbumInput {
            album_name: self.album_name,
        })
    }
}
