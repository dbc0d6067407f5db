mod catalog;
mod config;
mod consolidation;
mod model;
mod store;
mod workspace;

pub use catalog::{
    clean_input, is_mapping_category, system_field, DisplayColumn, FieldTypeSpec, SystemCategory,
    SystemField, DEFAULT_FIELD_TYPES, MANDATORY_FIELD_IDS, OUTPUT_COLUMNS, SYSTEM_CATEGORIES,
    SYSTEM_FIELDS,
};
pub use config::{StoreConfig, DEFAULT_API_ROOT};
pub use consolidation::{consolidate, ColumnMapping, Consolidation, MappingError};
pub use model::{
    year_template_path, AcademicYear, AdminConfig, College, DeptRecord, FieldTemplate,
    FieldTypeDef, Registry, TemplateCategory, YearTemplate, CONFIG_PATH, DEPT_GROUPING_PATH,
    DEPT_MASTER_PATH, YEAR_TEMPLATES_BASE,
};
pub use store::{DirectoryEntry, DocumentRef, DocumentStore, FetchResult, Payload, StoreError};
pub use workspace::{Workspace, WorkspaceError};
