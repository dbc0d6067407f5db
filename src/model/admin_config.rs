//! The main configuration document (`hedb/config.json`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::SystemField;

/// One academic year known to the console.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AcademicYear {
    pub year: String,
    pub is_default: bool,
}

/// A reusable field template — a built-in field or a user-defined one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldTemplate {
    pub id: String,
    pub label: String,
    pub required: bool,
    pub is_system: bool,
    pub order: u32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub example: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl FieldTemplate {
    /// Seed a template from a built-in field spec.
    pub fn from_system(spec: &SystemField) -> Self {
        FieldTemplate {
            id: spec.id.to_string(),
            label: spec.label.to_string(),
            required: spec.required,
            is_system: true,
            order: spec.order,
            example: spec.example.to_string(),
            field_type: spec.field_type.map(str::to_string),
            category: None,
        }
    }
}

/// A grouping of templates in the template library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateCategory {
    pub id: String,
    pub name: String,
    pub is_locked: bool,
    pub order: i32,
}

/// A field type available in the template editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldTypeDef {
    pub key: String,
    pub label: String,
}

/// Global console configuration.
///
/// Every field is defaulted so a document written by an older console
/// version still deserializes. `addressRules` and `allianceModeDepts`
/// have no fixed schema; they round-trip untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminConfig {
    pub global_fields: Vec<FieldTemplate>,
    pub academic_years: Vec<AcademicYear>,
    pub template_categories: Vec<TemplateCategory>,
    pub field_types: Vec<FieldTypeDef>,
    pub address_rules: HashMap<String, Value>,
    pub alliance_mode_depts: HashMap<String, Value>,
}

impl AdminConfig {
    /// The year marked as default, if any.
    pub fn default_year(&self) -> Option<&str> {
        self.academic_years
            .iter()
            .find(|y| y.is_default)
            .map(|y| y.year.as_str())
    }

    pub fn has_year(&self, year: &str) -> bool {
        self.academic_years.iter().any(|y| y.year == year)
    }
}
