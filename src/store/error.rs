use std::fmt;

/// Error type for remote document store operations.
#[derive(Debug)]
pub enum StoreError {
    /// No credential configured; the operation never left the process.
    MissingCredential,
    /// Transport failure (DNS, connection refused, timeout).
    Network(reqwest::Error),
    /// The remote rejected the credential (401).
    Authentication,
    /// Permission denied or rate limit exceeded (403).
    AccessDenied,
    /// Any other non-success read response.
    Remote { status: u16 },
    /// A successful response whose envelope could not be decoded
    /// (bad base64, non-UTF-8 bytes, unreadable body).
    Decode(String),
    /// A write was rejected, including version-token conflicts. The
    /// document and its prior token are unchanged.
    Write { path: String, status: String },
    /// A delete was rejected, including version-token conflicts.
    Delete { path: String, status: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::MissingCredential => write!(f, "missing access token"),
            StoreError::Network(e) => write!(f, "network error: {}", e),
            StoreError::Authentication => {
                write!(f, "authentication failed: bad token or insufficient scope")
            }
            StoreError::AccessDenied => {
                write!(f, "access denied: insufficient permission or rate limited")
            }
            StoreError::Remote { status } => write!(f, "remote error: HTTP {}", status),
            StoreError::Decode(message) => write!(f, "decode error: {}", message),
            StoreError::Write { path, status } => {
                write!(f, "write failed ({}): {}", path, status)
            }
            StoreError::Delete { path, status } => {
                write!(f, "delete failed ({}): {}", path, status)
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Network(err)
    }
}
