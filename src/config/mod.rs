//! Store configuration: repository coordinates and credentials.

use serde::{Deserialize, Serialize};

/// Default API root for the hosted content API.
pub const DEFAULT_API_ROOT: &str = "https://api.github.com";

/// Repository coordinates and credentials for the document store.
///
/// Both tokens are excluded from serialization: persisted connection
/// settings carry only the owner/repository pair, never a secret.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    pub owner: String,
    pub repo: String,
    /// Long-lived credential.
    #[serde(skip)]
    pub token: Option<String>,
    /// Session-scoped credential. Takes priority over `token`.
    #[serde(skip)]
    pub session_token: Option<String>,
    #[serde(skip)]
    api_root: Option<String>,
}

impl StoreConfig {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        StoreConfig {
            owner: owner.into(),
            repo: repo.into(),
            ..StoreConfig::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// Point the client at a different API root (tests, proxies).
    pub fn with_api_root(mut self, root: impl Into<String>) -> Self {
        self.api_root = Some(root.into());
        self
    }

    pub fn api_root(&self) -> &str {
        self.api_root.as_deref().unwrap_or(DEFAULT_API_ROOT)
    }

    /// The credential to send: the session token when present, otherwise
    /// the long-lived one.
    pub fn credential(&self) -> Option<&str> {
        self.session_token.as_deref().or(self.token.as_deref())
    }
}
