/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for deleting an album
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct DeleteAlbumInput {
    /// The name of the album to delete.
    pub album_name: Option<String>,
}

impl DeleteAlbumInput {
    /// Creates a new builder-style object to manufacture [`DeleteAlbumInput`](crate::operation::delete_album::DeleteAlbumInput).
    pub fn builder() -> DeleteAlbumInputBuilder {
        DeleteAlbumInputBuilder::default()
    }

    /// The name of the album to delete.
    pub fn album_name(&self) -> Option<&str> {
        self.album_name.as_deref()
    }
}

/// A builder for [`DeleteAlbumInput`](crate::operation::delete_album::DeleteAlbumInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct DeleteAlbumInputBuilder {
    pub(crate) album_name: Option<String>,
}

impl DeleteAlbumInputBuilder {
    /// Set the name of the album to delete.
    ///
    /// The name is used as given and is not validated.
    ///
    /// NOTE: An album name is required.
    pub fn album_name(mut self, input: impl Into<String>) -> Self {
        self.album_name = Some(input.into());
        self
    }

    /// Set the name of the album to delete.
    pub fn set_album_name(mut self, input: Option<String>) -> Self {
        self.album_name = input;
        self
    }

    /// The name of the album to delete.
    pub fn get_album_name(&self) -> &Option<String> {
        &self.album_name
    }

    /// Consumes the builder and constructs a [`DeleteAlbumInput`](crate::operation::delete_album::DeleteAlbumInput).
    pub fn build(self) -> Result<DeleteAlbumInput, BuildError> {
        if self.album_name.is_none() {
            return Err(BuildError::missing_field(
                "album_name",
                "An album name is required",
            ));
        }

        Ok(DeleteAlbumInput {
            album_name: self.album_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::DeleteAlbumInput;

    #[test]
    fn test_no_album_name_error() {
        let err = DeleteAlbumInput::builder().build().unwrap_err();
        assert!(err.to_string().contains("An album name is required"));
    }
}
