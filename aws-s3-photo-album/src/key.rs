/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error;
use crate::DELIMITER;

/// Characters escaped when encoding a URI component.
///
/// Everything except ASCII alphanumerics and `-_.!~*'()` is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `input` as a URI component.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Decode a percent-encoded URI component.
///
/// Returns `None` if the decoded bytes are not valid UTF-8.
pub fn decode_component(input: &str) -> Option<String> {
    percent_decode_str(input)
        .decode_utf8()
        .ok()
        .map(Cow::into_owned)
}

/// The key of the marker object for an album, e.g. `Trip%202024/`.
///
/// This is also the prefix shared by every photo in the album.
pub fn album_key(album_name: &str) -> String {
    format!("{}{DELIMITER}", encode_component(album_name))
}

/// Recover the album name from an album key (or a common prefix returned by S3).
///
/// The first delimiter is stripped before decoding. If the key can't be decoded the raw
/// key is returned instead.
pub fn album_name_from_key(key: &str) -> String {
    let encoded = key.replacen(DELIMITER, "", 1);
    match decode_component(&encoded) {
        Some(name) => name,
        None => {
            tracing::warn!("album key {key:?} is not a valid percent-encoded name");
            encoded
        }
    }
}

/// Derive the object key for a photo in an album.
///
/// The file name is used verbatim but must not contain the delimiter, otherwise the photo
/// would appear to be nested below the album.
pub fn photo_key(album_name: &str, file_name: &str) -> Result<String, error::Error> {
    if file_name.is_empty() || file_name.contains(DELIMITER) {
        return Err(error::invalid_input(
            "Photo file names cannot contain slashes.",
        ));
    }
    Ok(format!("{}{file_name}", album_key(album_name)))
}
