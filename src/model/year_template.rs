//! Per-year field template documents.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::admin_config::FieldTemplate;
use crate::catalog;

/// The field-template document for one academic year
/// (`hedb/year_templates/year_{Y}_templates.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct YearTemplate {
    pub fields: Vec<FieldTemplate>,
    pub alliance_mode_depts: HashMap<String, Value>,
}

impl YearTemplate {
    /// A fresh template seeded with the built-in fields.
    pub fn with_system_fields() -> Self {
        YearTemplate {
            fields: catalog::SYSTEM_FIELDS
                .iter()
                .map(FieldTemplate::from_system)
                .collect(),
            alliance_mode_depts: HashMap::new(),
        }
    }

    pub fn field(&self, id: &str) -> Option<&FieldTemplate> {
        self.fields.iter().find(|f| f.id == id)
    }
}
