//! Client for a version-controlled content API storing JSON documents.
//!
//! Reads bypass any intermediate cache. Writes and deletes are conditional
//! on the last-known sha, so a concurrent writer surfaces as a rejected
//! request rather than a silently lost update.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::StoreConfig;

use super::document::Payload;
use super::error::StoreError;
use super::fetch::{DirectoryEntry, FetchResult};

#[derive(Debug)]
pub struct DocumentStore {
    config: StoreConfig,
    http: reqwest::Client,
}

#[derive(Serialize)]
struct WriteRequest<'a> {
    message: String,
    content: String,
    branch: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

#[derive(Serialize)]
struct DeleteRequest<'a> {
    message: String,
    sha: &'a str,
    branch: &'static str,
}

#[derive(Deserialize)]
struct WriteResponse {
    content: WrittenContent,
}

#[derive(Deserialize)]
struct WrittenContent {
    sha: String,
}

impl DocumentStore {
    pub fn new(config: StoreConfig) -> Self {
        DocumentStore {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Fetch `path`. A missing document is a [`FetchResult::NotFound`]
    /// result, not an error.
    pub async fn fetch(&self, path: &str) -> Result<FetchResult, StoreError> {
        let token = self.credential()?;

        let response = self
            .http
            .get(self.contents_url(path))
            .query(&[("t", unix_millis().to_string())])
            .header("Authorization", format!("token {token}"))
            .header("Accept", "application/vnd.github.v3+json")
            .header("Cache-Control", "no-store")
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(FetchResult::NotFound);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(StoreError::Authentication);
        }
        if status == StatusCode::FORBIDDEN {
            return Err(StoreError::AccessDenied);
        }
        if !status.is_success() {
            return Err(StoreError::Remote {
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        let body: Value =
            serde_json::from_str(&text).map_err(|e| StoreError::Decode(e.to_string()))?;
        tracing::debug!("fetched {}", path);
        decode_body(body)
    }

    /// Create or replace the document at `path`, returning the new sha.
    ///
    /// Pass the sha from the last fetch or write of this path; pass `None`
    /// to create. A stale sha is rejected by the remote and surfaces as
    /// [`StoreError::Write`] — re-fetch before retrying.
    pub async fn write(
        &self,
        path: &str,
        payload: &Payload,
        sha: Option<&str>,
    ) -> Result<String, StoreError> {
        let token = self.credential()?;

        let request = WriteRequest {
            message: format!("Update {path}"),
            content: STANDARD.encode(payload.render()),
            branch: "main",
            sha,
        };

        let response = self
            .http
            .put(self.contents_url(path))
            .header("Authorization", format!("token {token}"))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("write failed for {}: {}", path, status);
            return Err(StoreError::Write {
                path: path.to_string(),
                status: status_text(status),
            });
        }

        let written: WriteResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        tracing::debug!("wrote {}", path);
        Ok(written.content.sha)
    }

    /// Permanently remove the document at `path`. `sha` must equal the
    /// document's current token.
    pub async fn delete(&self, path: &str, sha: &str) -> Result<(), StoreError> {
        let token = self.credential()?;

        let request = DeleteRequest {
            message: format!("Delete {path}"),
            sha,
            branch: "main",
        };

        let response = self
            .http
            .delete(self.contents_url(path))
            .header("Authorization", format!("token {token}"))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("delete failed for {}: {}", path, status);
            return Err(StoreError::Delete {
                path: path.to_string(),
                status: status_text(status),
            });
        }

        tracing::debug!("deleted {}", path);
        Ok(())
    }

    fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.config.api_root(),
            self.config.owner,
            self.config.repo,
            path
        )
    }

    fn credential(&self) -> Result<&str, StoreError> {
        self.config.credential().ok_or(StoreError::MissingCredential)
    }
}

/// Interpret a successful read body.
///
/// A listing becomes a directory result. An envelope with a content blob
/// is base64-decoded and parsed as JSON; content that decodes but does not
/// parse is returned as raw text rather than an error. Envelopes without
/// content (submodules, symlinks) pass through untouched.
fn decode_body(body: Value) -> Result<FetchResult, StoreError> {
    if body.is_array() {
        let entries: Vec<DirectoryEntry> =
            serde_json::from_value(body).map_err(|e| StoreError::Decode(e.to_string()))?;
        return Ok(FetchResult::Directory(entries));
    }

    let sha = body
        .get("sha")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let Some(content) = body.get("content").and_then(Value::as_str) else {
        return Ok(FetchResult::Document { value: body, sha });
    };

    // The remote wraps base64 content with newlines.
    let stripped: String = content.chars().filter(|c| *c != '\n').collect();
    let bytes = STANDARD
        .decode(stripped.as_bytes())
        .map_err(|e| StoreError::Decode(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|e| StoreError::Decode(e.to_string()))?;

    match serde_json::from_str::<Value>(&text) {
        Ok(value) => Ok(FetchResult::Document { value, sha }),
        Err(_) => Ok(FetchResult::RawText { text, sha }),
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}
