/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_config::meta::region::ProvideRegion;
use aws_config::BehaviorVersion;
use aws_types::region::Region;

use crate::config::identity_pool::IdentityPoolCredentialsProvider;
use crate::config::{Builder, DEFAULT_REGION};
use crate::Config;

/// Load photo album [`Config`] from the environment.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
    region: Option<String>,
    identity_pool_id: Option<String>,
    endpoint_url: Option<String>,
}

impl ConfigLoader {
    /// Set the bucket holding every album and photo.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.builder = self.builder.bucket(bucket);
        self
    }

    /// Set the region of the bucket and of the identity pool.
    ///
    /// Default is the region resolved from the environment, falling back to `us-east-1`.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Resolve credentials from an Amazon Cognito identity pool instead of the default
    /// credentials chain.
    pub fn identity_pool_id(mut self, identity_pool_id: impl Into<String>) -> Self {
        self.identity_pool_id = Some(identity_pool_id.into());
        self
    }

    /// Send S3 requests to a custom endpoint (e.g. an S3 compatible server).
    ///
    /// Path-style addressing is used and photo URLs are built from this endpoint.
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Load the default configuration
    ///
    /// If fields have been overridden during builder construction, the override values will be
    /// used. Otherwise, the default values for each field will be provided.
    ///
    /// # Panics
    ///
    /// Panics if no bucket was set.
    pub async fn load(self) -> Config {
        let region = match self.region {
            Some(region) => Region::new(region),
            None => aws_config::default_provider::region::default_provider()
                .region()
                .await
                .unwrap_or_else(|| Region::from_static(DEFAULT_REGION)),
        };
        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region.clone());

        if let Some(identity_pool_id) = self.identity_pool_id {
            let identity_config = aws_config::defaults(BehaviorVersion::latest())
                .region(region.clone())
                .no_credentials()
                .load()
                .await;
            tracing::debug!("using identity pool {identity_pool_id} for credentials");
            let provider = IdentityPoolCredentialsProvider::new(
                aws_sdk_cognitoidentity::Client::new(&identity_config),
                identity_pool_id,
            );
            loader = loader.credentials_provider(provider);
        }

        let shared_config = loader.load().await;
        let mut s3_config = aws_sdk_s3::config::Builder::from(&shared_config);
        let mut builder = self.builder.region(region.as_ref());
        if let Some(endpoint_url) = self.endpoint_url {
            s3_config = s3_config.endpoint_url(&endpoint_url).force_path_style(true);
            builder = builder.object_url_base(endpoint_url);
        }

        let s3_client = aws_sdk_s3::Client::from_conf(s3_config.build());
        builder.client(s3_client).build()
    }
}
