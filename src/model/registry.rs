//! College grouping and department master registry.
//!
//! Department and college names change across academic years. The master
//! keeps a `historical_names` map per entity; lookups resolve the name a
//! unit carried in a given year, falling back to the current name and
//! finally to the raw id.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Master record for one department, keyed by department id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeptRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub historical_names: HashMap<String, String>,
}

/// One college entry in the grouping document
/// (`hedb/data_departments.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct College {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub historical_names: HashMap<String, String>,
    /// Department ids grouped under this college.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub departments: Vec<String>,
}

/// College grouping plus department master, with year-aware name lookup.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    pub colleges: Vec<College>,
    pub master: HashMap<String, DeptRecord>,
}

impl Registry {
    pub fn new(colleges: Vec<College>, master: HashMap<String, DeptRecord>) -> Self {
        Registry { colleges, master }
    }

    pub fn college(&self, college_id: &str) -> Option<&College> {
        self.colleges.iter().find(|c| c.id == college_id)
    }

    /// Full name of a department as it was known in `year`.
    pub fn dept_full_name(&self, dept_id: &str, year: &str) -> String {
        let Some(record) = self.master.get(dept_id) else {
            return dept_id.to_string();
        };
        if let Some(name) = record.historical_names.get(year) {
            return name.clone();
        }
        if !record.name.is_empty() {
            return record.name.clone();
        }
        dept_id.to_string()
    }

    /// Display name for a department: the short name when requested and
    /// available, otherwise the full name for `year`.
    pub fn dept_display_name(&self, dept_id: &str, use_short: bool, year: &str) -> String {
        if use_short {
            if let Some(short) = self.master.get(dept_id).and_then(|r| r.short_name.as_deref()) {
                return short.to_string();
            }
        }
        self.dept_full_name(dept_id, year)
    }

    /// Full name of a college as it was known in `year`.
    pub fn college_full_name(&self, college_id: &str, year: &str) -> String {
        let Some(college) = self.college(college_id) else {
            return college_id.to_string();
        };
        if let Some(name) = college.historical_names.get(year) {
            return name.clone();
        }
        if !college.name.is_empty() {
            return college.name.clone();
        }
        college_id.to_string()
    }

    /// Display name for a college: short name first when requested.
    pub fn college_display_name(&self, college_id: &str, use_short: bool, year: &str) -> String {
        if use_short {
            if let Some(short) = self.college(college_id).and_then(|c| c.short_name.as_deref()) {
                return short.to_string();
            }
        }
        self.college_full_name(college_id, year)
    }
}
