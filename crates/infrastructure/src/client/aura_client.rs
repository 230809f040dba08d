//! Reqwest-based facade over the Aura control-plane API.
//!
//! Every operation is a single atomic HTTP exchange: build one request, wait
//! for the full response, relay the provider's JSON verbatim or fail with a
//! typed error. No retries, no caching, no pagination.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info, instrument};

use aura_application::TokenStore;
use aura_domain::{AuraError, AuraResult, Credentials, InstanceSpec};

use super::ClientConfig;

/// Content-Type for the token exchange body.
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Token response from the exchange endpoint. Extra fields (token type,
/// expiry) are ignored; only the access token is persisted.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Typed client for the Aura control-plane API.
///
/// Wraps a [`reqwest::Client`] and a [`TokenStore`]. The token lifecycle has
/// two states, unauthenticated and authenticated; the only transition is a
/// successful [`authenticate`](Self::authenticate) call, which persists the
/// bearer token the other operations attach. Every operation that requires
/// auth checks token presence first and fails with
/// [`AuraError::NotAuthenticated`] before issuing any network call.
pub struct AuraClient<S> {
    http: Client,
    config: ClientConfig,
    tokens: S,
}

impl<S: TokenStore> AuraClient<S> {
    /// Creates a client from a configuration and a token store.
    ///
    /// # Errors
    /// Returns [`AuraError::Config`] if the underlying HTTP client cannot be
    /// built.
    pub fn new(config: ClientConfig, tokens: S) -> AuraResult<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AuraError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            config,
            tokens,
        })
    }

    /// Returns the token store backing this client.
    pub const fn token_store(&self) -> &S {
        &self.tokens
    }

    /// Returns the client configuration.
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Exchanges client credentials for a bearer token and persists it.
    ///
    /// Issues `POST oauth/token` with HTTP Basic auth and a form-urlencoded
    /// `grant_type=client_credentials` body. On 200 the `access_token` field
    /// is extracted from the JSON response and saved, overwriting any
    /// previously stored token. Any other status fails with
    /// [`AuraError::AuthenticationFailed`] and leaves the store untouched.
    #[instrument(skip(self, credentials), fields(client_id = %credentials.client_id))]
    pub async fn authenticate(&self, credentials: &Credentials) -> AuraResult<()> {
        debug!("exchanging client credentials for an access token");

        let body = serde_urlencoded::to_string([("grant_type", "client_credentials")])
            .map_err(|e| AuraError::Config(format!("failed to encode form: {e}")))?;

        let response = self
            .http
            .post(self.config.endpoint("oauth/token"))
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(map_transport_error)?;

        if status != StatusCode::OK {
            return Err(AuraError::AuthenticationFailed {
                status: status.as_u16(),
                body: text,
            });
        }

        let token: TokenResponse = serde_json::from_str(&text)
            .map_err(|e| AuraError::Network(format!("invalid token response: {e}")))?;
        self.tokens.save(&token.access_token).await?;

        info!("authenticated against the control plane");
        Ok(())
    }

    /// Creates a managed database instance.
    ///
    /// The provider accepts the request asynchronously (202) and returns a
    /// payload containing the connection URL, generated password and
    /// instance id, relayed verbatim.
    #[instrument(skip(self, spec), fields(name = %spec.name, region = %spec.region))]
    pub async fn create_instance(&self, spec: &InstanceSpec) -> AuraResult<Value> {
        let token = self.bearer_token().await?;
        info!("creating instance");

        let request = self
            .http
            .post(self.config.endpoint("v1/instances"))
            .bearer_auth(&token)
            .json(spec);
        self.dispatch(request, StatusCode::ACCEPTED).await
    }

    /// Resizes an instance to a new memory size.
    #[instrument(skip(self), fields(instance_id = %instance_id, new_memory = %new_memory))]
    pub async fn resize_instance(&self, instance_id: &str, new_memory: &str) -> AuraResult<Value> {
        let token = self.bearer_token().await?;
        info!("resizing instance");

        let request = self
            .http
            .patch(self.config.endpoint(&format!("v1/instances/{instance_id}")))
            .bearer_auth(&token)
            .json(&json!({ "memory": new_memory }));
        self.dispatch(request, StatusCode::ACCEPTED).await
    }

    /// Takes an on-demand snapshot of an instance.
    #[instrument(skip(self), fields(instance_id = %instance_id))]
    pub async fn create_snapshot(&self, instance_id: &str) -> AuraResult<Value> {
        let token = self.bearer_token().await?;
        info!("creating snapshot");

        let request = self
            .http
            .post(
                self.config
                    .endpoint(&format!("v1/instances/{instance_id}/snapshots")),
            )
            .bearer_auth(&token);
        self.dispatch(request, StatusCode::ACCEPTED).await
    }

    /// Restores an instance from one of its snapshots.
    #[instrument(skip(self), fields(instance_id = %instance_id, snapshot_id = %snapshot_id))]
    pub async fn restore_snapshot(
        &self,
        instance_id: &str,
        snapshot_id: &str,
    ) -> AuraResult<Value> {
        let token = self.bearer_token().await?;
        info!("restoring snapshot");

        let request = self
            .http
            .post(self.config.endpoint(&format!(
                "v1/instances/{instance_id}/snapshots/{snapshot_id}/restore"
            )))
            .bearer_auth(&token);
        self.dispatch(request, StatusCode::ACCEPTED).await
    }

    /// Deletes an instance.
    #[instrument(skip(self), fields(instance_id = %instance_id))]
    pub async fn delete_instance(&self, instance_id: &str) -> AuraResult<Value> {
        let token = self.bearer_token().await?;
        info!("deleting instance");

        let request = self
            .http
            .delete(self.config.endpoint(&format!("v1/instances/{instance_id}")))
            .bearer_auth(&token);
        self.dispatch(request, StatusCode::ACCEPTED).await
    }

    /// Lists all instances visible to the authenticated tenant.
    ///
    /// Unlike the mutating operations this is a synchronous read; the
    /// provider answers with 200.
    #[instrument(skip(self))]
    pub async fn list_instances(&self) -> AuraResult<Value> {
        let token = self.bearer_token().await?;
        debug!("listing instances");

        let request = self
            .http
            .get(self.config.endpoint("v1/instances"))
            .bearer_auth(&token);
        self.dispatch(request, StatusCode::OK).await
    }

    /// Pre-flight token lookup: fail before any network call if no token has
    /// been stored.
    async fn bearer_token(&self) -> AuraResult<String> {
        if !self.tokens.exists().await {
            return Err(AuraError::NotAuthenticated);
        }
        Ok(self.tokens.load().await?)
    }

    /// Sends a prepared request and applies the acceptance-status contract:
    /// the expected status yields the provider's JSON payload, anything else
    /// becomes [`AuraError::Api`] carrying the status and raw body.
    async fn dispatch(&self, request: RequestBuilder, accept: StatusCode) -> AuraResult<Value> {
        let response = request.send().await.map_err(map_transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(map_transport_error)?;

        if status != accept {
            return Err(AuraError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text)
            .map_err(|e| AuraError::Network(format!("invalid JSON in response: {e}")))
    }
}

/// Maps reqwest transport failures onto [`AuraError::Network`].
fn map_transport_error(error: reqwest::Error) -> AuraError {
    if error.is_timeout() {
        return AuraError::Network("request timed out".to_string());
    }
    if error.is_connect() {
        return AuraError::Network(format!("connection failed: {error}"));
    }
    AuraError::Network(error.to_string())
}
