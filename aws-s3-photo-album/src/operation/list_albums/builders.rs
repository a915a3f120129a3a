/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use super::ListAlbumsOutput;

/// Fluent builder for listing albums
#[derive(Debug)]
pub struct ListAlbumsFluentBuilder {
    handle: Arc<crate::client::Handle>,
}

impl ListAlbumsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self { handle }
    }

    /// List every album in the bucket
    #[tracing::instrument(skip_all, level = "debug", name = "list-albums", fields(
        bucket = self.handle.bucket(),
    ))]
    pub async fn send(self) -> Result<ListAlbumsOutput, crate::error::Error> {
        crate::operation::list_albums::ListAlbums::orchestrate(self.handle).await
    }
}
