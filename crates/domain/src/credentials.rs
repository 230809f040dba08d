//! API credentials for the client-credentials exchange.

use std::fmt;

/// Client id / client secret pair used for the OAuth2 client-credentials
/// token exchange.
///
/// Credentials are ephemeral: they are held in memory for the duration of an
/// `authenticate` call and never persisted. The `Debug` implementation
/// redacts the secret so credentials cannot leak through logging.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Client id issued by the provider console.
    pub client_id: String,
    /// Client secret issued alongside the client id.
    pub client_secret: String,
}

impl Credentials {
    /// Creates a credential pair.
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn debug_redacts_secret() {
        let creds = Credentials::new("my-client", "super-secret");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("my-client"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn new_stores_both_fields() {
        let creds = Credentials::new("id", "secret");
        assert_eq!(creds.client_id, "id");
        assert_eq!(creds.client_secret, "secret");
    }
}
