/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;
use std::path::{Path, PathBuf};

use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;

use crate::error;
use crate::DELIMITER;

/// A validated album name.
///
/// Album names are trimmed of surrounding whitespace, must contain at least one
/// non-space character and must not contain the `/` delimiter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlbumName(String);

impl AlbumName {
    /// Validate a raw, user supplied album name.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, error::Error> {
        let name = raw.as_ref().trim();
        if name.is_empty() {
            return Err(error::invalid_input(
                "Album names must contain at least one non-space character.",
            ));
        }
        if name.contains(DELIMITER) {
            return Err(error::invalid_input("Album names cannot contain slashes."));
        }
        Ok(Self(name.to_owned()))
    }

    /// The album name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AlbumName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlbumName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An album in the bucket
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    /// The decoded, human readable album name
    pub name: String,

    /// The album key (prefix) including the trailing delimiter
    pub key: String,
}

impl Album {
    /// Create the album for a name, deriving its key
    pub(crate) fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let key = crate::key::album_key(&name);
        Self { name, key }
    }

    /// Create the album represented by a key (or a listed common prefix)
    pub(crate) fn from_key(key: impl Into<String>) -> Self {
        let key = key.into();
        let name = crate::key::album_name_from_key(&key);
        Self { name, key }
    }

    /// The decoded, human readable album name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The album key (prefix) including the trailing delimiter
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A photo stored in an album
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    /// The full object key of the photo
    pub key: String,

    /// The display name (the key with the album prefix removed)
    pub name: String,

    /// Public URL the photo can be fetched from
    pub url: String,
}

impl Photo {
    /// The full object key of the photo
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The display name (the key with the album prefix removed)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Public URL the photo can be fetched from
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// A local file selected for upload
#[derive(Clone)]
pub struct PhotoFile {
    name: String,
    source: PhotoSource,
}

#[derive(Clone)]
enum PhotoSource {
    Bytes(Bytes),
    Path(PathBuf),
}

impl PhotoFile {
    /// Create a photo from an in-memory buffer with the given file name.
    pub fn from_bytes(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            source: PhotoSource::Bytes(data.into()),
        }
    }

    /// Create a photo from a local file. The photo is named after the file's base name.
    ///
    /// The file is not read until the photo is uploaded.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, error::Error> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                error::invalid_input(format!("{path:?} does not name a valid UTF-8 file"))
            })?;
        Ok(Self {
            name: name.to_owned(),
            source: PhotoSource::Path(path.to_owned()),
        })
    }

    /// The file name used to derive the photo key
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) async fn into_byte_stream(self) -> Result<ByteStream, error::Error> {
        match self.source {
            PhotoSource::Bytes(data) => Ok(ByteStream::from(data)),
            PhotoSource::Path(path) => Ok(ByteStream::from_path(path).await?),
        }
    }
}

impl fmt::Debug for PhotoFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = f.debug_struct("PhotoFile");
        formatter.field("name", &self.name);
        match &self.source {
            PhotoSource::Bytes(data) => formatter.field("len", &data.len()),
            PhotoSource::Path(path) => formatter.field("path", path),
        };
        formatter.finish()
    }
}
