mod client;
mod document;
mod error;
mod fetch;

pub use client::DocumentStore;
pub use document::{DocumentRef, Payload};
pub use error::StoreError;
pub use fetch::{DirectoryEntry, FetchResult};
