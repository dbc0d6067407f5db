//! In-process stub of the contents API for store tests.
//!
//! Files live in a shared map guarded by a mutex; every write mints a new
//! sha and writes/deletes are rejected when the submitted sha does not
//! match the stored one — the same conditional semantics the real API
//! enforces.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde_json::{json, Value};

use hedb::StoreConfig;

#[derive(Clone, Default)]
pub struct Remote {
    files: Arc<Mutex<HashMap<String, StoredFile>>>,
    next_sha: Arc<Mutex<u64>>,
    deny: Arc<Mutex<Option<u16>>>,
}

#[derive(Clone)]
struct StoredFile {
    text: String,
    sha: String,
}

impl Remote {
    /// Seed a file directly, returning its sha. Reseeding an existing
    /// path replaces the content and mints a fresh sha.
    pub fn seed(&self, path: &str, text: &str) -> String {
        let sha = self.mint_sha();
        self.files.lock().unwrap().insert(
            path.to_string(),
            StoredFile {
                text: text.to_string(),
                sha: sha.clone(),
            },
        );
        sha
    }

    /// Answer every following request with this status code.
    pub fn deny_with(&self, status: u16) {
        *self.deny.lock().unwrap() = Some(status);
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    pub fn text_of(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).map(|f| f.text.clone())
    }

    pub fn sha_of(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).map(|f| f.sha.clone())
    }

    fn mint_sha(&self) -> String {
        let mut next = self.next_sha.lock().unwrap();
        *next += 1;
        format!("sha-{:04}", *next)
    }

    fn denied(&self) -> Option<(StatusCode, Json<Value>)> {
        let status = (*self.deny.lock().unwrap())?;
        Some((
            StatusCode::from_u16(status).unwrap(),
            Json(json!({"message": "denied"})),
        ))
    }
}

/// Start the stub on a random port and return it with a client config
/// already pointed at it.
pub async fn start() -> (Remote, StoreConfig) {
    let remote = Remote::default();
    let app = Router::new()
        .route(
            "/repos/:owner/:repo/contents/*path",
            get(fetch_file).put(put_file).delete(delete_file),
        )
        .with_state(remote.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = StoreConfig::new("hedb-tw", "data")
        .with_token("test-token")
        .with_api_root(format!("http://{addr}"));
    (remote, config)
}

/// Wrap encoded content in newlines the way the real API does.
fn wrap(encoded: &str) -> String {
    encoded
        .as_bytes()
        .chunks(60)
        .map(|chunk| std::str::from_utf8(chunk).unwrap())
        .collect::<Vec<_>>()
        .join("\n")
}

async fn fetch_file(
    State(remote): State<Remote>,
    Path((_owner, _repo, path)): Path<(String, String, String)>,
) -> (StatusCode, Json<Value>) {
    if let Some(denied) = remote.denied() {
        return denied;
    }

    let files = remote.files.lock().unwrap();
    if let Some(file) = files.get(&path) {
        let body = json!({
            "name": path.rsplit('/').next().unwrap_or(&path),
            "path": path,
            "sha": file.sha,
            "encoding": "base64",
            "content": wrap(&STANDARD.encode(&file.text)),
        });
        return (StatusCode::OK, Json(body));
    }

    let prefix = format!("{path}/");
    let entries: Vec<Value> = files
        .iter()
        .filter(|(stored, _)| stored.starts_with(&prefix))
        .map(|(stored, file)| {
            json!({
                "name": stored.rsplit('/').next().unwrap_or(stored),
                "path": stored,
                "sha": file.sha,
                "type": "file",
            })
        })
        .collect();
    if !entries.is_empty() {
        return (StatusCode::OK, Json(Value::Array(entries)));
    }

    (StatusCode::NOT_FOUND, Json(json!({"message": "Not Found"})))
}

async fn put_file(
    State(remote): State<Remote>,
    Path((_owner, _repo, path)): Path<(String, String, String)>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if let Some(denied) = remote.denied() {
        return denied;
    }

    let provided = body.get("sha").and_then(Value::as_str);
    let encoded = body.get("content").and_then(Value::as_str).unwrap_or_default();
    let text = STANDARD
        .decode(encoded)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_default();

    let mut files = remote.files.lock().unwrap();
    match files.get(&path) {
        Some(existing) if provided != Some(existing.sha.as_str()) => {
            return (
                StatusCode::CONFLICT,
                Json(json!({"message": format!("{path} does not match")})),
            );
        }
        None if provided.is_some() => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({"message": "sha supplied for a new file"})),
            );
        }
        _ => {}
    }

    let sha = remote.mint_sha();
    files.insert(
        path,
        StoredFile {
            text,
            sha: sha.clone(),
        },
    );
    (StatusCode::OK, Json(json!({"content": {"sha": sha}})))
}

async fn delete_file(
    State(remote): State<Remote>,
    Path((_owner, _repo, path)): Path<(String, String, String)>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if let Some(denied) = remote.denied() {
        return denied;
    }

    let provided = body.get("sha").and_then(Value::as_str);
    let mut files = remote.files.lock().unwrap();
    match files.get(&path) {
        None => (StatusCode::NOT_FOUND, Json(json!({"message": "Not Found"}))),
        Some(existing) if provided != Some(existing.sha.as_str()) => (
            StatusCode::CONFLICT,
            Json(json!({"message": format!("{path} does not match")})),
        ),
        Some(_) => {
            files.remove(&path);
            (StatusCode::OK, Json(json!({"commit": {}})))
        }
    }
}
