mod consolidate;
mod mapping;

pub use consolidate::{consolidate, Consolidation};
pub use mapping::{ColumnMapping, MappingError};
