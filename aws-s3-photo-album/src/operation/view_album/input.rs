/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for viewing an album
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct ViewAlbumInput {
    /// The name of the album to view.
    pub album_name: Option<String>,
}

impl ViewAlbumInput {
    /// Creates a new builder-style object to manufacture [`ViewAlbumInput`](crate::operation::view_album::ViewAlbumInput).
    pub fn builder() -> ViewAlbumInputBuilder {
        ViewAlbumInputBuilder::default()
    }

    /// The name of the album to view.
    pub fn album_name(&self) -> Option<&str> {
        self.album_name.as_deref()
    }
}

/// A builder for [`ViewAlbumInput`](crate::operation::view_album::ViewAlbumInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct ViewAlbumInputBuilder {
    pub(crate) album_name: Option<String>,
}

impl ViewAlbumInputBuilder {
    /// Set the name of the album to view.
    ///
    /// The name is used as given and is not validated.
    ///
    /// NOTE: An album name is required.
    pub fn album_name(mut self, input: impl Into<String>) -> Self {
        self.album_name = Some(input.into());
        self
    }

    /// Set the name of the album to view.
    pub fn set_album_name(mut self, input: Option<String>) -> Self {
        self.album_name = input;
        self
    }

    /// The name of the album to view.
    pub fn get_album_name(&self) -> &Option<String> {
        &self.album_name
    }

    /// Consumes the builder and constructs a [`ViewAlbumInput`](crate::operation::view_album::ViewAlbumInput).
    pub fn build(self) -> Result<ViewAlbumInput, BuildError> {
        if self.album_name.is_none() {
            return Err(BuildError::missing_field(
                "album_name",
                "An album name is required",
            ));
        }

        Ok(ViewAlbumInput {
            album_name: self.album_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ViewAlbumInput;

    #[test]
    fn test_no_album_name_error() {
        let err = ViewAlbumInput::builder().build().unwrap_err();
        assert!(err.to_string().contains("An album name is required"));
    }
}
