/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;

use crate::client::Handle;
use crate::error;

/// Paginator for `ListObjectsV2` that follows continuation tokens until the listing
/// is complete.
#[derive(Debug)]
pub(crate) struct ListObjectsPaginator {
    handle: Arc<Handle>,
    prefix: Option<String>,
    delimiter: Option<String>,
    state: State,
}

#[derive(Debug, PartialEq)]
enum State {
    Paginating { next_token: Option<String> },
    Done,
}

impl State {
    fn next_state(&self, output: &ListObjectsV2Output) -> State {
        let is_truncated =
            output.is_truncated().unwrap_or(false) && output.next_continuation_token().is_some();

        match self {
            State::Paginating { .. } if is_truncated => State::Paginating {
                next_token: output.next_continuation_token.to_owned(),
            },
            _ => State::Done,
        }
    }
}

/// Every key and common prefix returned by a complete listing, in listing order.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct Listing {
    pub(crate) keys: Vec<String>,
    pub(crate) common_prefixes: Vec<String>,
}

impl ListObjectsPaginator {
    pub(crate) fn new(handle: Arc<Handle>) -> Self {
        Self {
            handle,
            prefix: None,
            delimiter: None,
            state: State::Paginating { next_token: None },
        }
    }

    /// Limit the listing to keys that begin with the given prefix
    pub(crate) fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Group keys sharing a prefix up to the delimiter into common prefixes
    pub(crate) fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    pub(crate) async fn next_page(&mut self) -> Option<Result<ListObjectsV2Output, error::Error>> {
        let next_token = match &self.state {
            State::Done => return None,
            State::Paginating { next_token } => next_token.clone(),
        };

        let result = self
            .handle
            .client()
            .list_objects_v2()
            .bucket(self.handle.bucket())
            .set_prefix(self.prefix.clone())
            .set_delimiter(self.delimiter.clone())
            .set_continuation_token(next_token)
            .send()
            .await;

        match result {
            Ok(output) => {
                self.state = self.state.next_state(&output);
                Some(Ok(output))
            }
            Err(err) => {
                self.state = State::Done;
                Some(Err(err.into()))
            }
        }
    }

    /// Drive the paginator to completion and aggregate every page.
    pub(crate) async fn collect(mut self) -> Result<Listing, error::Error> {
        let mut listing = Listing::default();
        let mut pages = 0;
        while let Some(page) = self.next_page().await {
            let page = page?;
            pages += 1;
            listing
                .keys
                .extend(page.contents().iter().filter_map(|obj| obj.key.clone()));
            listing.common_prefixes.extend(
                page.common_prefixes()
                    .iter()
                    .filter_map(|prefix| prefix.prefix.clone()),
            );
        }
        tracing::trace!(
            "listed {} keys and {} common prefixes in {pages} pages",
            listing.keys.len(),
            listing.common_prefixes.len()
        );
        Ok(listing)
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::error::ErrorMetadata;
    use aws_sdk_s3::operation::list_objects_v2::{ListObjectsV2Error, ListObjectsV2Output};
    use aws_sdk_s3::types::{CommonPrefix, Object};
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};
    use test_common::mock_client_with_stubbed_http_client;

    use super::{ListObjectsPaginator, Listing, State};
    use crate::operation::test_util::{test_handle, TEST_BUCKET};

    fn list_resp(
        next_token: Option<&'static str>,
        common_prefixes: Option<Vec<&'static str>>,
        keys: Vec<&'static str>,
    ) -> ListObjectsV2Output {
        let common_prefixes = common_prefixes.map(|p| {
            p.iter()
                .map(|v| CommonPrefix::builder().prefix(*v).build())
                .collect()
        });
        let contents = keys
            .iter()
            .map(|k| Object::builder().key(*k).build())
            .collect();
        ListObjectsV2Output::builder()
            .is_truncated(next_token.is_some())
            .set_next_continuation_token(next_token.map(str::to_owned))
            .set_common_prefixes(common_prefixes)
            .set_contents(Some(contents))
            .build()
    }

    #[test]
    fn test_next_state() {
        let start = State::Paginating { next_token: None };

        let state2 = start.next_state(&list_resp(Some("token1"), None, vec!["k1", "k2"]));
        assert_eq!(
            state2,
            State::Paginating {
                next_token: Some("token1".to_owned())
            }
        );

        let state3 = state2.next_state(&list_resp(None, None, vec!["k3"]));
        assert_eq!(state3, State::Done);
        assert_eq!(state3.next_state(&list_resp(Some("token2"), None, vec![])), State::Done);
    }

    #[test]
    fn test_truncated_without_token_is_done() {
        let output = ListObjectsV2Output::builder().is_truncated(true).build();
        let start = State::Paginating { next_token: None };
        assert_eq!(start.next_state(&output), State::Done);
    }

    #[tokio::test]
    async fn test_collect_follows_continuation_tokens() {
        let page1 = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| {
                r.bucket() == Some(TEST_BUCKET)
                    && r.delimiter() == Some("/")
                    && r.continuation_token().is_none()
            })
            .then_output(|| list_resp(Some("token1"), Some(vec!["a/", "b/"]), vec![]));
        let page2 = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| r.continuation_token() == Some("token1"))
            .then_output(|| list_resp(None, Some(vec!["c/"]), vec!["loose"]));
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&page1, &page2]);

        let listing = ListObjectsPaginator::new(test_handle(client))
            .delimiter("/")
            .collect()
            .await
            .unwrap();

        assert_eq!(
            listing,
            Listing {
                keys: vec!["loose".to_owned()],
                common_prefixes: vec!["a/".to_owned(), "b/".to_owned(), "c/".to_owned()],
            }
        );
    }

    #[tokio::test]
    async fn test_collect_stops_on_error() {
        let page1 = mock!(aws_sdk_s3::Client::list_objects_v2)
            .then_output(|| list_resp(Some("token1"), None, vec!["k1"]));
        let page2 = mock!(aws_sdk_s3::Client::list_objects_v2).then_error(|| {
            ListObjectsV2Error::generic(
                ErrorMetadata::builder()
                    .code("AccessDenied")
                    .message("Access Denied")
                    .build(),
            )
        });
        let client = mock_client_with_stubbed_http_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&page1, &page2]
        );

        let err = ListObjectsPaginator::new(test_handle(client))
            .prefix("k")
            .collect()
            .await
            .unwrap_err();
        assert!(err.is_storage_error());
        assert_eq!("Access Denied", err.message());
        assert_eq!(1, page1.num_calls());
        assert_eq!(1, page2.num_calls());
    }
}
