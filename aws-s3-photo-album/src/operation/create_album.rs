/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for creating an album
pub use input::{CreateAlbumInput, CreateAlbumInputBuilder};
mod output;
/// Output type for creating an album
pub use output::{CreateAlbumOutput, CreateAlbumOutputBuilder};

use std::sync::Arc;

use aws_sdk_s3::primitives::ByteStream;

use crate::error;
use crate::types::{Album, AlbumName};

/// Operation struct for creating an album
#[derive(Clone, Default, Debug)]
pub(crate) struct CreateAlbum;

impl CreateAlbum {
    /// Execute a single `CreateAlbum` operation
    ///
    /// The name is validated before anything is sent to S3. The marker object is written
    /// unconditionally; creating an album that already exists is not an error.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: CreateAlbumInput,
    ) -> Result<CreateAlbumOutput, error::Error> {
        let name = AlbumName::parse(input.album_name().unwrap_or_default())?;
        let album = Album::from_name(name.as_str());

        tracing::debug!("writing album marker {}", album.key());
        handle
            .client()
            .put_object()
            .bucket(handle.bucket())
            .key(album.key())
            .body(ByteStream::from_static(b""))
            .send()
            .await?;

        Ok(CreateAlbumOutput::builder().album(album).build())
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::operation::put_object::PutObjectOutput;
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};

    use super::{CreateAlbum, CreateAlbumInput};
    use crate::operation::test_util::{test_handle, TEST_BUCKET};

    #[tokio::test]
    async fn test_writes_encoded_marker() {
        let put_object = mock!(aws_sdk_s3::Client::put_object)
            .match_requests(|r| r.bucket() == Some(TEST_BUCKET) && r.key() == Some("Trip%202024/"))
            .then_output(|| PutObjectOutput::builder().build());
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&put_object]);

        let input = CreateAlbumInput::builder()
            .album_name("  Trip 2024 ")
            .build()
            .unwrap();
        let output = CreateAlbum::orchestrate(test_handle(client), input)
            .await
            .unwrap();
        assert_eq!("Trip 2024", output.album().name());
        assert_eq!("Trip%202024/", output.album().key());
    }

    #[tokio::test]
    async fn test_invalid_name_never_reaches_storage() {
        // a request that reached S3 would succeed and fail the assertion below
        let put_object = mock!(aws_sdk_s3::Client::put_object)
            .then_output(|| PutObjectOutput::builder().build());
        let client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, &[&put_object]);
        let handle = test_handle(client);

        for name in ["", "   ", "a/b", " /"] {
            let input = CreateAlbumInput::builder().album_name(name).build().unwrap();
            let err = CreateAlbum::orchestrate(handle.clone(), input)
                .await
                .unwrap_err();
            assert!(err.is_validation_error(), "{name:?} should be rejected");
        }
    }
}
