/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Load photo album [`Config`] from the environment
pub mod loader;

/// Credentials from an Amazon Cognito identity pool
pub mod identity_pool;

/// Region used when neither the environment nor the builder provides one.
pub(crate) const DEFAULT_REGION: &str = "us-east-1";

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    bucket: String,
    region: String,
    object_url_base: String,
    client: aws_sdk_s3::client::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The bucket holding every album and photo
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The region of the bucket
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Base URL (scheme and host, no trailing slash) photo URLs are built from
    pub fn object_url_base(&self) -> &str {
        &self.object_url_base
    }

    /// The Amazon S3 client instance that will be used to send requests to S3.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }

    /// The public path-style URL of an object: `<base>/<bucket>/<encoded key>`.
    pub fn object_url(&self, key: &str) -> String {
        format!(
            "{}/{}/{}",
            self.object_url_base,
            self.bucket,
            crate::key::encode_component(key)
        )
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    bucket: Option<String>,
    region: Option<String>,
    object_url_base: Option<String>,
    client: Option<aws_sdk_s3::Client>,
}

impl Builder {
    /// Set the bucket holding every album and photo.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Set the bucket holding every album and photo.
    pub fn set_bucket(mut self, bucket: Option<String>) -> Self {
        self.bucket = bucket;
        self
    }

    /// Set the region of the bucket.
    ///
    /// Defaults to the region of the S3 client, or `us-east-1` when the client has none.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the region of the bucket.
    pub fn set_region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    /// Override the base URL photo URLs are built from, e.g. `http://localhost:9000`.
    ///
    /// Default is `https://s3.<region>.amazonaws.com`.
    pub fn object_url_base(mut self, base: impl Into<String>) -> Self {
        self.object_url_base = Some(base.into());
        self
    }

    /// Override the base URL photo URLs are built from.
    pub fn set_object_url_base(mut self, base: Option<String>) -> Self {
        self.object_url_base = base;
        self
    }

    /// Set an explicit S3 client to use.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`](crate::config::Config)
    ///
    /// # Panics
    ///
    /// Panics if no bucket or no S3 client was set.
    pub fn build(self) -> Config {
        let client = self.client.expect("client set");
        let region = self
            .region
            .or_else(|| client.config().region().map(|r| r.as_ref().to_owned()))
            .unwrap_or_else(|| DEFAULT_REGION.to_owned());
        let object_url_base = self
            .object_url_base
            .map(|base| base.trim_end_matches('/').to_owned())
            .unwrap_or_else(|| format!("https://s3.{region}.amazonaws.com"));

        Config {
            bucket: self.bucket.expect("bucket set"),
            region,
            object_url_base,
            client,
        }
    }
}
