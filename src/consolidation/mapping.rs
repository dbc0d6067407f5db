//! Column mapping from an uploaded roster file to record fields.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::model::FieldTemplate;

/// Error type for mapping validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// A mapped field id does not exist in the active template.
    UnknownField(String),
    /// The field's category is not one records can be mapped from.
    CategoryNotMappable { field: String, category: String },
    /// The mapped column is not present in the uploaded header row.
    MissingColumn { field: String, header: String },
    /// A field that must be mapped before consolidation is not.
    MandatoryUnmapped(&'static str),
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingError::UnknownField(id) => write!(f, "unknown field: {}", id),
            MappingError::CategoryNotMappable { field, category } => {
                write!(f, "field {} is in unmappable category {}", field, category)
            }
            MappingError::MissingColumn { field, header } => {
                write!(f, "column {} mapped to field {} is not in the file", header, field)
            }
            MappingError::MandatoryUnmapped(id) => {
                write!(f, "mandatory field {} is not mapped", id)
            }
        }
    }
}

impl std::error::Error for MappingError {}

/// Field id → source column header.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnMapping {
    columns: HashMap<String, String>,
}

impl ColumnMapping {
    pub fn new() -> Self {
        ColumnMapping::default()
    }

    pub fn assign(&mut self, field_id: impl Into<String>, header: impl Into<String>) {
        self.columns.insert(field_id.into(), header.into());
    }

    pub fn unassign(&mut self, field_id: &str) {
        self.columns.remove(field_id);
    }

    pub fn column_for(&self, field_id: &str) -> Option<&str> {
        self.columns.get(field_id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Check this mapping against the active template fields and the
    /// uploaded header row. Fields without a category are the built-in
    /// ones and are always mappable; categorized fields must sit in a
    /// system category.
    pub fn validate(
        &self,
        fields: &[FieldTemplate],
        headers: &[String],
    ) -> Result<(), MappingError> {
        for (field_id, header) in &self.columns {
            let Some(field) = fields.iter().find(|f| &f.id == field_id) else {
                return Err(MappingError::UnknownField(field_id.clone()));
            };
            if let Some(category) = field.category.as_deref() {
                if !catalog::is_mapping_category(category) {
                    return Err(MappingError::CategoryNotMappable {
                        field: field_id.clone(),
                        category: category.to_string(),
                    });
                }
            }
            if !headers.iter().any(|h| h == header) {
                return Err(MappingError::MissingColumn {
                    field: field_id.clone(),
                    header: header.clone(),
                });
            }
        }

        for id in catalog::MANDATORY_FIELD_IDS {
            if !self.columns.contains_key(*id) {
                return Err(MappingError::MandatoryUnmapped(id));
            }
        }

        Ok(())
    }
}
