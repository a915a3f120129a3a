/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;
use std::time::SystemTime;

use aws_credential_types::provider::{self, error::CredentialsError, future, ProvideCredentials};
use aws_credential_types::Credentials;
use tokio::sync::OnceCell;

const PROVIDER_NAME: &str = "CognitoIdentityPool";

/// Credentials provider that trades an Amazon Cognito identity pool ID for temporary,
/// unauthenticated AWS credentials.
///
/// The identity is resolved with `GetId` on first use and kept for the lifetime of the
/// provider (and its clones). Each refresh only calls `GetCredentialsForIdentity`, so expired
/// credentials are replaced for the same identity. The SDK identity cache wrapping this
/// provider takes care of reusing the credentials until they expire.
#[derive(Debug, Clone)]
pub struct IdentityPoolCredentialsProvider {
    client: aws_sdk_cognitoidentity::Client,
    identity_pool_id: String,
    identity_id: Arc<OnceCell<String>>,
}

impl IdentityPoolCredentialsProvider {
    /// Create a provider for the given identity pool.
    ///
    /// `client` should be configured without credentials; both Cognito calls are unsigned.
    pub fn new(client: aws_sdk_cognitoidentity::Client, identity_pool_id: impl Into<String>) -> Self {
        Self {
            client,
            identity_pool_id: identity_pool_id.into(),
            identity_id: Arc::new(OnceCell::new()),
        }
    }

    /// The identity pool credentials are requested from
    pub fn identity_pool_id(&self) -> &str {
        &self.identity_pool_id
    }

    async fn identity_id(&self) -> Result<&str, CredentialsError> {
        let identity_id = self
            .identity_id
            .get_or_try_init(|| async {
                let output = self
                    .client
                    .get_id()
                    .identity_pool_id(&self.identity_pool_id)
                    .send()
                    .await
                    .map_err(CredentialsError::provider_error)?;
                let identity_id = output
                    .identity_id
                    .ok_or_else(|| CredentialsError::unhandled("GetId returned no identity ID"))?;
                tracing::debug!("resolved identity {identity_id}");
                Ok::<_, CredentialsError>(identity_id)
            })
            .await?;
        Ok(identity_id)
    }

    #[tracing::instrument(skip_all, level = "debug", name = "resolve-identity-pool-credentials", fields(
        identity_pool_id = %self.identity_pool_id,
    ))]
    async fn credentials(&self) -> provider::Result {
        let identity_id = self.identity_id().await?;

        let output = self
            .client
            .get_credentials_for_identity()
            .identity_id(identity_id)
            .send()
            .await
            .map_err(CredentialsError::provider_error)?;
        let creds = output.credentials().ok_or_else(|| {
            CredentialsError::unhandled("GetCredentialsForIdentity returned no credentials")
        })?;

        let access_key_id = creds
            .access_key_id()
            .ok_or_else(|| CredentialsError::unhandled("missing access key ID"))?;
        let secret_key = creds
            .secret_key()
            .ok_or_else(|| CredentialsError::unhandled("missing secret key"))?;
        let expiry = creds
            .expiration()
            .and_then(|expiration| SystemTime::try_from(*expiration).ok());

        Ok(Credentials::new(
            access_key_id,
            secret_key,
            creds.session_token().map(str::to_owned),
            expiry,
            PROVIDER_NAME,
        ))
    }
}

impl ProvideCredentials for IdentityPoolCredentialsProvider {
    fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a>
    where
        Self: 'a,
    {
        future::ProvideCredentials::new(self.credentials())
    }
}

#[cfg(test)]
mod tests {
    use aws_credential_types::provider::error::CredentialsError;
    use aws_credential_types::provider::ProvideCredentials;
    use aws_sdk_cognitoidentity::operation::get_credentials_for_identity::GetCredentialsForIdentityOutput;
    use aws_sdk_cognitoidentity::operation::get_id::{GetIdError, GetIdOutput};
    use aws_sdk_cognitoidentity::types::Credentials;
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};
    use aws_smithy_types::error::ErrorMetadata;
    use test_common::mock_client_with_stubbed_http_client;

    use super::IdentityPoolCredentialsProvider;

    const POOL_ID: &str = "us-east-1:00000000-0000-0000-0000-000000000000";

    fn credentials_output(access_key_id: &'static str) -> GetCredentialsForIdentityOutput {
        GetCredentialsForIdentityOutput::builder()
            .identity_id("identity-1")
            .credentials(
                Credentials::builder()
                    .access_key_id(access_key_id)
                    .secret_key("SECRET")
                    .session_token("TOKEN")
                    .build(),
            )
            .build()
    }

    #[tokio::test]
    async fn test_exchanges_pool_id_for_credentials() {
        let get_id = mock!(aws_sdk_cognitoidentity::Client::get_id)
            .match_requests(|r| r.identity_pool_id() == Some(POOL_ID))
            .then_output(|| GetIdOutput::builder().identity_id("identity-1").build());
        let get_creds = mock!(aws_sdk_cognitoidentity::Client::get_credentials_for_identity)
            .match_requests(|r| r.identity_id() == Some("identity-1"))
            .then_output(|| credentials_output("AKID"));
        let client = mock_client!(
            aws_sdk_cognitoidentity,
            RuleMode::Sequential,
            &[&get_id, &get_creds]
        );

        let provider = IdentityPoolCredentialsProvider::new(client, POOL_ID);
        let creds = provider.provide_credentials().await.unwrap();
        assert_eq!("AKID", creds.access_key_id());
        assert_eq!("SECRET", creds.secret_access_key());
        assert_eq!(Some("TOKEN"), creds.session_token());
    }

    #[tokio::test]
    async fn test_refresh_reuses_identity() {
        let get_id = mock!(aws_sdk_cognitoidentity::Client::get_id)
            .match_requests(|r| r.identity_pool_id() == Some(POOL_ID))
            .then_output(|| GetIdOutput::builder().identity_id("identity-1").build());
        let first_creds = mock!(aws_sdk_cognitoidentity::Client::get_credentials_for_identity)
            .match_requests(|r| r.identity_id() == Some("identity-1"))
            .then_output(|| credentials_output("AKID1"));
        let refreshed_creds = mock!(aws_sdk_cognitoidentity::Client::get_credentials_for_identity)
            .match_requests(|r| r.identity_id() == Some("identity-1"))
            .then_output(|| credentials_output("AKID2"));
        let client = mock_client!(
            aws_sdk_cognitoidentity,
            RuleMode::Sequential,
            &[&get_id, &first_creds, &refreshed_creds]
        );

        let provider = IdentityPoolCredentialsProvider::new(client, POOL_ID);
        let first = provider.provide_credentials().await.unwrap();
        // clones share the resolved identity
        let refreshed = provider.clone().provide_credentials().await.unwrap();
        assert_eq!("AKID1", first.access_key_id());
        assert_eq!("AKID2", refreshed.access_key_id());
        assert_eq!(1, get_id.num_calls());
        assert_eq!(1, first_creds.num_calls());
        assert_eq!(1, refreshed_creds.num_calls());
    }

    #[tokio::test]
    async fn test_identity_failure_is_provider_error() {
        let get_id = mock!(aws_sdk_cognitoidentity::Client::get_id).then_error(|| {
            GetIdError::generic(
                ErrorMetadata::builder()
                    .code("ResourceNotFoundException")
                    .message("IdentityPool not found")
                    .build(),
            )
        });
        let client = mock_client_with_stubbed_http_client!(
            aws_sdk_cognitoidentity,
            RuleMode::Sequential,
            &[&get_id]
        );

        let provider = IdentityPoolCredentialsProvider::new(client, POOL_ID);
        let err = provider.provide_credentials().await.unwrap_err();
        assert!(matches!(err, CredentialsError::ProviderError(_)), "{err:?}");
        assert_eq!(1, get_id.num_calls());
    }
}
