/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::Config;
use std::sync::Arc;

/// Photo album client for Amazon Simple Storage Service.
///
/// Cloning a client is cheap; all clones share the same configuration and S3 client.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations, e.g. config, S3 client, etc
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Handle {
    /// The S3 client to use for SDK operations
    pub(crate) fn client(&self) -> &aws_sdk_s3::Client {
        self.config.client()
    }

    /// The bucket every operation targets
    pub(crate) fn bucket(&self) -> &str {
        self.config.bucket()
    }
}

impl Client {
    /// Creates a new client from a photo album config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// List every album in the bucket.
    ///
    /// Constructs a fluent builder for the
    /// [`ListAlbums`](crate::operation::list_albums::builders::ListAlbumsFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// async fn print_albums(
    ///     client: &aws_s3_photo_album::Client,
    /// ) -> Result<(), aws_s3_photo_album::error::Error> {
    ///     let output = client.list_albums().send().await?;
    ///     for album in output.albums() {
    ///         println!("{}", album.name());
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list_albums(&self) -> crate::operation::list_albums::builders::ListAlbumsFluentBuilder {
        crate::operation::list_albums::builders::ListAlbumsFluentBuilder::new(self.handle.clone())
    }

    /// Create a new, empty album.
    ///
    /// Constructs a fluent builder for the
    /// [`CreateAlbum`](crate::operation::create_album::builders::CreateAlbumFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// async fn create(
    ///     client: &aws_s3_photo_album::Client,
    /// ) -> Result<(), aws_s3_photo_album::error::Error> {
    ///     let output = client.create_album().album_name("Trip 2024").send().await?;
    ///     assert_eq!("Trip%202024/", output.album().key());
    ///     Ok(())
    /// }
    /// ```
    pub fn create_album(
        &self,
    ) -> crate::operation::create_album::builders::CreateAlbumFluentBuilder {
        crate::operation::create_album::builders::CreateAlbumFluentBuilder::new(self.handle.clone())
    }

    /// List the photos in an album.
    ///
    /// Constructs a fluent builder for the
    /// [`ViewAlbum`](crate::operation::view_album::builders::ViewAlbumFluentBuilder) operation.
    pub fn view_album(&self) -> crate::operation::view_album::builders::ViewAlbumFluentBuilder {
        crate::operation::view_album::builders::ViewAlbumFluentBuilder::new(self.handle.clone())
    }

    /// Upload a photo into an album.
    ///
    /// Constructs a fluent builder for the
    /// [`AddPhoto`](crate::operation::add_photo::builders::AddPhotoFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use aws_s3_photo_album::types::PhotoFile;
    ///
    /// async fn upload(
    ///     client: &aws_s3_photo_album::Client,
    /// ) -> Result<(), aws_s3_photo_album::error::Error> {
    ///     let photo = PhotoFile::from_path("/tmp/beach.jpg")?;
    ///     client
    ///         .add_photo()
    ///         .album_name("Trip 2024")
    ///         .file(photo)
    ///         .send()
    ///         .await?;
    ///     Ok(())
    /// }
    /// ```
    pub fn add_photo(&self) -> crate::operation::add_photo::builders::AddPhotoFluentBuilder {
        crate::operation::add_photo::builders::AddPhotoFluentBuilder::new(self.handle.clone())
    }

    /// Delete a single photo.
    ///
    /// Constructs a fluent builder for the
    /// [`DeletePhoto`](crate::operation::delete_photo::builders::DeletePhotoFluentBuilder) operation.
    pub fn delete_photo(
        &self,
    ) -> crate::operation::delete_photo::builders::DeletePhotoFluentBuilder {
        crate::operation::delete_photo::builders::DeletePhotoFluentBuilder::new(self.handle.clone())
    }

    /// Delete an album together with every photo in it.
    ///
    /// Constructs a fluent builder for the
    /// [`DeleteAlbum`](crate::operation::delete_album::builders::DeleteAlbumFluentBuilder) operation.
    pub fn delete_album(
        &self,
    ) -> crate::operation::delete_album::builders::DeleteAlbumFluentBuilder {
        crate::operation::delete_album::builders::DeleteAlbumFluentBuilder::new(self.handle.clone())
    }
}
