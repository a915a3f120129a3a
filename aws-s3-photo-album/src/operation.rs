/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Types for the list albums operation
pub mod list_albums;

/// Types for the create album operation
pub mod create_album;

/// Types for the view album operation
pub mod view_album;

/// Types for the add photo operation
pub mod add_photo;

/// Types for the delete photo operation
pub mod delete_photo;

/// Types for the delete album operation
pub mod delete_album;

/// Paginated `ListObjectsV2` shared by the listing operations
pub(crate) mod list_objects;
