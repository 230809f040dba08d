//! Token store port
//!
//! Defines the interface for persisting the bearer token obtained from the
//! client-credentials exchange. The store holds exactly one record, which is
//! overwritten on each re-authentication.

use async_trait::async_trait;

use aura_domain::TokenStoreError;

/// Repository trait for the persisted access token.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Overwrites the persisted token.
    ///
    /// # Errors
    /// Returns [`TokenStoreError::Io`] if the underlying storage cannot be
    /// written.
    async fn save(&self, token: &str) -> Result<(), TokenStoreError>;

    /// Loads the persisted token.
    ///
    /// # Errors
    /// Returns [`TokenStoreError::NotAuthenticated`] if no token has ever
    /// been saved (storage absent or empty).
    async fn load(&self) -> Result<String, TokenStoreError>;

    /// Non-failing existence check.
    ///
    /// Used by the client as a pre-flight check so operations requiring auth
    /// can fail before issuing any network call.
    async fn exists(&self) -> bool;
}
