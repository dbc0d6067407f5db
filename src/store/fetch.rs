use serde::Deserialize;
use serde_json::Value;

/// One entry in a directory listing response.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub sha: String,
    #[serde(rename = "type", default)]
    pub entry_type: String,
}

/// Outcome of fetching a path from the remote store.
#[derive(Debug, Clone)]
pub enum FetchResult {
    /// The path has never been written, or was deleted. Not an error:
    /// a following write with no sha creates the document.
    NotFound,
    /// The path names a directory.
    Directory(Vec<DirectoryEntry>),
    /// A decoded JSON document and the sha the next write must carry.
    Document { value: Value, sha: String },
    /// Decoded content that is not valid JSON, kept verbatim so the
    /// caller can inspect or repair it instead of losing the file.
    RawText { text: String, sha: String },
}

impl FetchResult {
    /// The version token carried by this result, if any.
    pub fn sha(&self) -> Option<&str> {
        match self {
            FetchResult::Document { sha, .. } | FetchResult::RawText { sha, .. } => Some(sha),
            FetchResult::NotFound | FetchResult::Directory(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchResult::NotFound)
    }

    /// The document value and its sha, when this result is a document.
    pub fn into_document(self) -> Option<(Value, String)> {
        match self {
            FetchResult::Document { value, sha } => Some((value, sha)),
            _ => None,
        }
    }
}
