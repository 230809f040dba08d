//! Error taxonomy for the control-plane client.
//!
//! Status-code branching is modeled as a closed result type: every operation
//! returns either the provider's payload or one of these variants, so the
//! acceptance contract (200 for the token exchange, 202 for mutations) stays
//! mechanically checkable.

use thiserror::Error;

/// Errors raised by the token store.
#[derive(Debug, Error)]
pub enum TokenStoreError {
    /// No token has ever been saved (record absent or empty).
    #[error("not authenticated: no access token stored")]
    NotAuthenticated,

    /// The underlying storage could not be read or written.
    #[error("token storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the control-plane client.
#[derive(Debug, Error)]
pub enum AuraError {
    /// The token exchange returned a non-200 status.
    #[error("authentication failed: status {status}: {body}")]
    AuthenticationFailed {
        /// HTTP status returned by the token endpoint.
        status: u16,
        /// Raw response body, relayed verbatim.
        body: String,
    },

    /// An operation requiring a token was attempted before authentication.
    #[error("not authenticated: run `authenticate` first")]
    NotAuthenticated,

    /// The provider rejected a resource operation (non-acceptance status).
    #[error("API request failed: status {status}: {body}")]
    Api {
        /// HTTP status returned by the provider.
        status: u16,
        /// Raw response body, relayed verbatim.
        body: String,
    },

    /// Transport-level failure, including request timeout.
    #[error("network error: {0}")]
    Network(String),

    /// Token store failure.
    #[error(transparent)]
    TokenStore(#[from] TokenStoreError),

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl AuraError {
    /// Returns the HTTP status carried by this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::AuthenticationFailed { status, .. } | Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for client operations.
pub type AuraResult<T> = Result<T, AuraError>;
