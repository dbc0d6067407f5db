//! Connected editing session over the admin documents.
//!
//! A [`Workspace`] holds the loaded configuration, registry, and active
//! year template together with one [`DocumentRef`] per document, and
//! replays the console's save ordering on [`Workspace::save_all`].

use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::model::{
    year_template_path, AdminConfig, College, DeptRecord, Registry, YearTemplate, CONFIG_PATH,
    DEPT_GROUPING_PATH, DEPT_MASTER_PATH,
};
use crate::store::{DocumentRef, DocumentStore, FetchResult, Payload, StoreError};

/// Error type for workspace operations.
#[derive(Debug)]
pub enum WorkspaceError {
    Store(StoreError),
    /// A path that must hold a JSON document held something else, or the
    /// document did not match its expected shape.
    Malformed { path: String },
    /// A document failed to serialize for writing.
    Encode(String),
}

impl fmt::Display for WorkspaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkspaceError::Store(e) => write!(f, "store error: {}", e),
            WorkspaceError::Malformed { path } => {
                write!(f, "document at {} is not usable as JSON", path)
            }
            WorkspaceError::Encode(message) => write!(f, "encode error: {}", message),
        }
    }
}

impl std::error::Error for WorkspaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WorkspaceError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for WorkspaceError {
    fn from(err: StoreError) -> Self {
        WorkspaceError::Store(err)
    }
}

#[derive(Debug)]
pub struct Workspace {
    store: DocumentStore,
    pub config: AdminConfig,
    config_ref: DocumentRef,
    pub registry: Registry,
    grouping_ref: DocumentRef,
    master_ref: DocumentRef,
    pub year_template: Option<YearTemplate>,
    active_year: Option<String>,
    dirty: bool,
}

impl Workspace {
    /// Load the admin documents from the store. Documents that do not
    /// exist yet start from their defaults and are created on first save.
    pub async fn connect(store: DocumentStore) -> Result<Self, WorkspaceError> {
        let (config, config_ref) = load_document::<AdminConfig>(&store, CONFIG_PATH).await?;
        let (colleges, grouping_ref) =
            load_document::<Vec<College>>(&store, DEPT_GROUPING_PATH).await?;
        let (master, master_ref) =
            load_document::<HashMap<String, DeptRecord>>(&store, DEPT_MASTER_PATH).await?;

        tracing::debug!(
            "workspace connected: {} years, {} colleges, {} departments",
            config.academic_years.len(),
            colleges.len(),
            master.len()
        );

        Ok(Workspace {
            store,
            config,
            config_ref,
            registry: Registry::new(colleges, master),
            grouping_ref,
            master_ref,
            year_template: None,
            active_year: None,
            dirty: false,
        })
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Switch the active academic year, loading its template document.
    /// A year with no template yet starts from the built-in fields.
    pub async fn select_year(&mut self, year: &str) -> Result<(), WorkspaceError> {
        let path = year_template_path(year);
        let template = match self.store.fetch(&path).await? {
            FetchResult::NotFound => YearTemplate::with_system_fields(),
            FetchResult::Document { value, .. } => serde_json::from_value(value)
                .map_err(|_| WorkspaceError::Malformed { path: path.clone() })?,
            FetchResult::Directory(_) | FetchResult::RawText { .. } => {
                return Err(WorkspaceError::Malformed { path });
            }
        };
        self.year_template = Some(template);
        self.active_year = Some(year.to_string());
        Ok(())
    }

    /// The year lookups should resolve against: the explicitly selected
    /// year, else the configured default.
    pub fn active_year(&self) -> Option<&str> {
        self.active_year
            .as_deref()
            .or_else(|| self.config.default_year())
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Persist every held document, in the console's save order: the main
    /// config always; the department master and college grouping only when
    /// dirty; then the active year's template, refetching its current sha
    /// immediately before the write.
    ///
    /// Each successful write replaces the stored sha. A stale sha anywhere
    /// surfaces as [`StoreError::Write`]; the dirty flag stays set so the
    /// caller can re-fetch and retry.
    pub async fn save_all(&mut self) -> Result<(), WorkspaceError> {
        let registry_changed = self.dirty;

        let sha = self
            .store
            .write(CONFIG_PATH, &to_payload(&self.config)?, self.config_ref.sha())
            .await?;
        self.config_ref.advance(sha);

        if registry_changed {
            let sha = self
                .store
                .write(
                    DEPT_MASTER_PATH,
                    &to_payload(&self.registry.master)?,
                    self.master_ref.sha(),
                )
                .await?;
            self.master_ref.advance(sha);
        }

        if registry_changed && !self.registry.colleges.is_empty() {
            let sha = self
                .store
                .write(
                    DEPT_GROUPING_PATH,
                    &to_payload(&self.registry.colleges)?,
                    self.grouping_ref.sha(),
                )
                .await?;
            self.grouping_ref.advance(sha);
        }

        if let (Some(year), Some(template)) = (self.active_year.as_deref(), self.year_template.as_ref()) {
            let path = year_template_path(year);
            let current = self.store.fetch(&path).await?;
            let sha = current.sha().map(str::to_string);
            self.store
                .write(&path, &to_payload(template)?, sha.as_deref())
                .await?;
        }

        self.dirty = false;
        tracing::debug!("workspace saved");
        Ok(())
    }
}

fn to_payload<T: Serialize>(value: &T) -> Result<Payload, WorkspaceError> {
    Payload::json(value).map_err(|e| WorkspaceError::Encode(e.to_string()))
}

async fn load_document<T: DeserializeOwned + Default>(
    store: &DocumentStore,
    path: &str,
) -> Result<(T, DocumentRef), WorkspaceError> {
    match store.fetch(path).await? {
        FetchResult::NotFound => Ok((T::default(), DocumentRef::new(path))),
        FetchResult::Document { value, sha } => {
            let parsed = serde_json::from_value(value).map_err(|_| WorkspaceError::Malformed {
                path: path.to_string(),
            })?;
            Ok((parsed, DocumentRef::with_sha(path, sha)))
        }
        FetchResult::Directory(_) | FetchResult::RawText { .. } => Err(WorkspaceError::Malformed {
            path: path.to_string(),
        }),
    }
}
