//! File-backed token store.
//!
//! The store holds a single record: the raw access-token string, overwritten
//! on each re-authentication. No expiry metadata is kept; the stored file is
//! compatible with a plain one-line token file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use aura_application::TokenStore;
use aura_domain::TokenStoreError;

/// Environment variable overriding the token file location.
const TOKEN_FILE_ENV: &str = "AURA_TOKEN_FILE";

/// File-backed [`TokenStore`] holding one raw access-token string.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the default per-user location.
    ///
    /// Honors `AURA_TOKEN_FILE` if set, otherwise uses
    /// `<config-dir>/aura-ctl/token`.
    ///
    /// # Errors
    /// Returns [`TokenStoreError::Io`] if no per-user configuration
    /// directory can be determined.
    pub fn from_default_location() -> Result<Self, TokenStoreError> {
        if let Ok(path) = std::env::var(TOKEN_FILE_ENV) {
            return Ok(Self::new(path));
        }
        let config_dir = dirs::config_dir().ok_or_else(|| {
            TokenStoreError::Io(std::io::Error::new(
                ErrorKind::NotFound,
                "no per-user configuration directory",
            ))
        })?;
        Ok(Self::new(config_dir.join("aura-ctl").join("token")))
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, token).await?;
        Ok(())
    }

    async fn load(&self) -> Result<String, TokenStoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(TokenStoreError::NotAuthenticated);
            }
            Err(e) => return Err(TokenStoreError::Io(e)),
        };
        // The record is a single line; tolerate a trailing newline.
        let token = content.lines().next().unwrap_or("").trim().to_string();
        if token.is_empty() {
            return Err(TokenStoreError::NotAuthenticated);
        }
        Ok(token)
    }

    async fn exists(&self) -> bool {
        tokio::fs::metadata(&self.path)
            .await
            .is_ok_and(|meta| meta.len() > 0)
    }
}
