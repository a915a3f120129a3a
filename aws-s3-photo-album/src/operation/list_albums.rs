/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod output;
/// Output type for listing albums
pub use output::{ListAlbumsOutput, ListAlbumsOutputBuilder};

use std::sync::Arc;

use crate::error;
use crate::operation::list_objects::ListObjectsPaginator;
use crate::types::Album;
use crate::DELIMITER;

/// Operation struct for listing albums
#[derive(Clone, Default, Debug)]
pub(crate) struct ListAlbums;

impl ListAlbums {
    /// Execute a single `ListAlbums` operation
    ///
    /// Albums are the common prefixes of the bucket when grouped by the delimiter. Every page
    /// of the listing is read before returning.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
    ) -> Result<ListAlbumsOutput, error::Error> {
        let listing = ListObjectsPaginator::new(handle)
            .delimiter(DELIMITER)
            .collect()
            .await?;

        let albums = listing
            .common_prefixes
            .into_iter()
            .map(Album::from_key)
            .collect();

        Ok(ListAlbumsOutput::builder().set_albums(Some(albums)).build())
    }
}
