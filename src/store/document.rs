use serde::Serialize;
use serde_json::Value;

/// A logical path plus the last-known version token for that path.
///
/// The token is `None` before the document exists (a write then creates
/// it), is replaced after every successful write, and is cleared again
/// after a successful delete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRef {
    path: String,
    sha: Option<String>,
}

impl DocumentRef {
    pub fn new(path: impl Into<String>) -> Self {
        DocumentRef {
            path: path.into(),
            sha: None,
        }
    }

    pub fn with_sha(path: impl Into<String>, sha: impl Into<String>) -> Self {
        DocumentRef {
            path: path.into(),
            sha: Some(sha.into()),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn sha(&self) -> Option<&str> {
        self.sha.as_deref()
    }

    /// Record the token returned by a successful write.
    pub fn advance(&mut self, sha: impl Into<String>) {
        self.sha = Some(sha.into());
    }

    /// Forget the token after a successful delete. The next write creates.
    pub fn clear(&mut self) {
        self.sha = None;
    }
}

/// Content submitted on the write path: a JSON structure serialized with
/// 2-space indentation, or pre-formatted text stored as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    /// Build a JSON payload from any serializable value.
    pub fn json<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Payload::Json(serde_json::to_value(value)?))
    }

    /// The exact text the store will receive.
    pub fn render(&self) -> String {
        match self {
            Payload::Json(value) => serde_json::to_string_pretty(value).unwrap_or_default(),
            Payload::Text(text) => text.clone(),
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Json(value)
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}
