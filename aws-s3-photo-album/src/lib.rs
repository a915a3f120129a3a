/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! Photo albums stored in a single Amazon S3 bucket.
//!
//! S3 has no folders, so albums are simulated with key prefixes. An album named `Trip 2024`
//! is represented by a zero length *marker object* with the key `Trip%202024/` and every
//! photo in it lives under that prefix, e.g. `Trip%202024/beach.jpg`.
//!
//! # Examples
//!
//! Load the default configuration and list albums:
//!
//! ```no_run
//! # async fn example() -> Result<(), aws_s3_photo_album::error::Error> {
//! let config = aws_s3_photo_album::from_env()
//!     .bucket("my-photo-bucket")
//!     .load()
//!     .await;
//! let client = aws_s3_photo_album::Client::new(config);
//!
//! let output = client.list_albums().send().await?;
//! for album in output.albums() {
//!     println!("{}", album.name());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! See the documentation for each client operation for more information:
//!
//! * [`list_albums`](crate::Client::list_albums) - list every album in the bucket
//! * [`create_album`](crate::Client::create_album) - create an empty album
//! * [`view_album`](crate::Client::view_album) - list the photos of an album
//! * [`add_photo`](crate::Client::add_photo) - upload a photo into an album
//! * [`delete_photo`](crate::Client::delete_photo) - delete a single photo
//! * [`delete_album`](crate::Client::delete_album) - delete an album and every photo in it
//!
//! [`PhotoApp`](crate::app::PhotoApp) ties the operations to a rendering [`Surface`](crate::app::Surface).

/// The path separator that divides an album key from a photo file name
pub(crate) const DELIMITER: &str = "/";

/// Error types emitted by `aws-s3-photo-album`
pub mod error;

/// Common types used by `aws-s3-photo-album`
pub mod types;

/// Object key conventions for albums and photos
pub mod key;

/// Photo album client
pub mod client;

/// Photo album operations
pub mod operation;

/// Photo album configuration
pub mod config;

/// HTML markup for album and photo views
pub mod render;

/// View state machine driving a rendering surface
pub mod app;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
