/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use std::{fs, io::Write};

use aws_sdk_s3::operation::delete_object::DeleteObjectOutput;
use aws_sdk_s3::operation::delete_objects::DeleteObjectsOutput;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use aws_sdk_s3::operation::put_object::PutObjectOutput;
use aws_sdk_s3::types::{CommonPrefix, Object};
use aws_smithy_mocks_experimental::{mock, Rule};
use tempfile::{tempdir, TempDir};

#[doc(hidden)]
pub mod __private {
    pub use aws_smithy_mocks_experimental::{mock_client, RuleMode};
    pub use aws_smithy_runtime::client::http::test_util::infallible_client_fn;
    pub use http_02x;
}

/// Create a mock client like `mock_client!` whose HTTP client answers every request with an
/// empty `200`.
///
/// Rules using `then_error` need a response to be received before the modeled error can be
/// returned, so use this macro whenever a rule fails.
#[macro_export]
macro_rules! mock_client_with_stubbed_http_client {
    ($aws_crate: ident, $rules: expr) => {
        $crate::mock_client_with_stubbed_http_client!(
            $aws_crate,
            $crate::__private::RuleMode::Sequential,
            $rules
        )
    };
    ($aws_crate: ident, $rule_mode: expr, $rules: expr) => {{
        $crate::__private::mock_client!($aws_crate, $rule_mode, $rules, |conf| {
            conf.http_client($crate::__private::infallible_client_fn(|_req| {
                $crate::__private::http_02x::Response::builder()
                    .status(200)
                    .body("")
                    .unwrap()
            }))
        })
    }};
}

/// Create a file named `name` holding `contents` in a new temporary directory.
///
/// The file is removed when the returned directory is dropped.
pub fn create_photo_file(name: &str, contents: &[u8]) -> (TempDir, PathBuf) {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(contents).unwrap();
    (temp_dir, path)
}

/// An in-memory bucket backing mocked S3 calls.
///
/// Writes and deletes made through the mocked client are applied to the bucket, and listings
/// reflect its current contents in lexical key order, honoring prefix and delimiter.
#[derive(Debug, Clone, Default)]
pub struct MockBucket {
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    objects: BTreeMap<String, Vec<u8>>,
    list_query: (Option<String>, Option<String>),
    puts: usize,
    bulk_deletes: usize,
}

impl MockBucket {
    /// Create an empty bucket
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an object directly, bypassing the client
    pub fn insert(&self, key: impl Into<String>, body: impl Into<Vec<u8>>) {
        self.lock().objects.insert(key.into(), body.into());
    }

    /// Every key in the bucket in lexical order
    pub fn keys(&self) -> Vec<String> {
        self.lock().objects.keys().cloned().collect()
    }

    /// The stored body of `key`, if the key exists
    pub fn body(&self, key: &str) -> Option<Vec<u8>> {
        self.lock().objects.get(key).cloned()
    }

    /// Number of `PutObject` requests received
    pub fn puts(&self) -> usize {
        self.lock().puts
    }

    /// Number of `DeleteObjects` requests received
    pub fn bulk_deletes(&self) -> usize {
        self.lock().bulk_deletes
    }

    /// The mock rules serving `PutObject`, `ListObjectsV2`, `DeleteObject` and
    /// `DeleteObjects` from this bucket.
    pub fn rules(&self) -> Vec<Rule> {
        let put = {
            let bucket = self.clone();
            mock!(aws_sdk_s3::Client::put_object)
                .match_requests(move |r| {
                    let body = r.body().bytes().map(<[u8]>::to_vec).unwrap_or_default();
                    let mut state = bucket.lock();
                    state.puts += 1;
                    state
                        .objects
                        .insert(r.key().unwrap_or_default().to_owned(), body);
                    true
                })
                .then_output(|| PutObjectOutput::builder().build())
        };

        let list = {
            let query = self.clone();
            let bucket = self.clone();
            mock!(aws_sdk_s3::Client::list_objects_v2)
                .match_requests(move |r| {
                    query.lock().list_query = (
                        r.prefix().map(str::to_owned),
                        r.delimiter().map(str::to_owned),
                    );
                    true
                })
                .then_output(move || bucket.list())
        };

        let delete_one = {
            let bucket = self.clone();
            mock!(aws_sdk_s3::Client::delete_object)
                .match_requests(move |r| {
                    if let Some(key) = r.key() {
                        bucket.lock().objects.remove(key);
                    }
                    true
                })
                .then_output(|| DeleteObjectOutput::builder().build())
        };

        let delete_many = {
            let bucket = self.clone();
            mock!(aws_sdk_s3::Client::delete_objects)
                .match_requests(move |r| {
                    let mut state = bucket.lock();
                    state.bulk_deletes += 1;
                    for object in r.delete().map(|d| d.objects()).unwrap_or_default() {
                        state.objects.remove(object.key());
                    }
                    true
                })
                .then_output(|| DeleteObjectsOutput::builder().build())
        };

        vec![put, list, delete_one, delete_many]
    }

    fn list(&self) -> ListObjectsV2Output {
        let state = self.lock();
        let (prefix, delimiter) = &state.list_query;
        let prefix = prefix.as_deref().unwrap_or_default();

        let mut contents = Vec::new();
        let mut common_prefixes = BTreeSet::new();
        for key in state.objects.keys().filter(|k| k.starts_with(prefix)) {
            let rest = &key[prefix.len()..];
            match delimiter.as_deref().and_then(|d| rest.find(d).map(|i| i + d.len())) {
                Some(end) => {
                    common_prefixes.insert(format!("{prefix}{}", &rest[..end]));
                }
                None => contents.push(Object::builder().key(key).build()),
            }
        }

        ListObjectsV2Output::builder()
            .set_contents(Some(contents))
            .set_common_prefixes(Some(
                common_prefixes
                    .into_iter()
                    .map(|p| CommonPrefix::builder().prefix(p).build())
                    .collect(),
            ))
            .is_truncated(false)
            .build()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }
}
