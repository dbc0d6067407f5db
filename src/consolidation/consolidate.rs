//! Roster consolidation: mapped rows into field-keyed records.

use std::collections::HashMap;

use crate::catalog::{self, OUTPUT_COLUMNS};
use crate::model::Registry;

use super::mapping::ColumnMapping;

/// Result of consolidating one uploaded roster through a column mapping.
#[derive(Debug, Clone, Default)]
pub struct Consolidation {
    records: Vec<HashMap<String, String>>,
    unique_course_depts: Vec<String>,
}

/// Consolidate `rows` (cells aligned with `headers`) through `mapping`.
///
/// Validating the mapping is the caller's step; a header missing here
/// simply yields empty cells. Cell values are trimmed on the way in.
pub fn consolidate(
    headers: &[String],
    rows: &[Vec<String>],
    mapping: &ColumnMapping,
) -> Consolidation {
    let index: HashMap<&str, usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.as_str(), i))
        .collect();

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let mut record = HashMap::new();
        for (field_id, header) in mapping.iter() {
            let cell = index
                .get(header.as_str())
                .and_then(|i| row.get(*i))
                .map(String::as_str);
            record.insert(field_id.clone(), catalog::clean_input(cell));
        }
        records.push(record);
    }

    let mut depts: Vec<String> = records
        .iter()
        .filter_map(|r| r.get("course_dept"))
        .filter(|d| !d.is_empty())
        .cloned()
        .collect();
    depts.sort();
    depts.dedup();

    Consolidation {
        records,
        unique_course_depts: depts,
    }
}

impl Consolidation {
    pub fn records(&self) -> &[HashMap<String, String>] {
        &self.records
    }

    /// Offering departments present in the roster, sorted and deduplicated.
    pub fn unique_course_depts(&self) -> &[String] {
        &self.unique_course_depts
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose offering department equals `dept`.
    pub fn records_for<'a>(
        &'a self,
        dept: &'a str,
    ) -> impl Iterator<Item = &'a HashMap<String, String>> {
        self.records
            .iter()
            .filter(move |r| r.get("course_dept").map(String::as_str) == Some(dept))
    }

    /// Project records through the report column order. College and
    /// department cells are resolved to display names for `year`; `group`
    /// restricts the output to one offering department.
    pub fn display_rows(
        &self,
        registry: &Registry,
        year: &str,
        group: Option<&str>,
    ) -> Vec<Vec<String>> {
        self.records
            .iter()
            .filter(|r| match group {
                Some(dept) => r.get("course_dept").map(String::as_str) == Some(dept),
                None => true,
            })
            .map(|record| {
                OUTPUT_COLUMNS
                    .iter()
                    .map(|column| {
                        let raw = record.get(column.id).cloned().unwrap_or_default();
                        if raw.is_empty() {
                            return raw;
                        }
                        match catalog::system_field(column.id).and_then(|f| f.field_type) {
                            Some("department") => registry.dept_display_name(&raw, true, year),
                            Some("college") => registry.college_display_name(&raw, true, year),
                            _ => raw,
                        }
                    })
                    .collect()
            })
            .collect()
    }
}
